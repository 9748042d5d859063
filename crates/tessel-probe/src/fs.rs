//! Filesystem capability consumed by the probe.
//!
//! The probe only needs two primitives: listing the names directly inside a
//! directory, and reading an entry's type without following symlinks.
//! [`OsFileSystem`] backs them with `std::fs`; tests and embedders can
//! supply their own.

use std::ffi::OsString;
use std::io;
use std::path::Path;

/// What the probe needs to know about a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntryKind {
    pub is_dir: bool,
    pub is_symlink: bool,
}

impl EntryKind {
    /// A plain file.
    pub const FILE: EntryKind = EntryKind {
        is_dir: false,
        is_symlink: false,
    };

    /// A real directory.
    pub const DIR: EntryKind = EntryKind {
        is_dir: true,
        is_symlink: false,
    };

    /// A symbolic link, whatever it points at.
    pub const SYMLINK: EntryKind = EntryKind {
        is_dir: false,
        is_symlink: true,
    };

    /// Returns true for directories the probe may descend into.
    pub fn is_traversable(&self) -> bool {
        self.is_dir && !self.is_symlink
    }
}

/// Directory listing and no-follow metadata lookup.
///
/// Both methods report failure through `io::Result`; the probe treats any
/// error as "no match here" and keeps going.
pub trait FileSystem {
    /// Returns the names of the immediate children of `dir`, in listing order.
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<OsString>>;

    /// Returns the type of `path` without following a final symlink.
    fn symlink_metadata(&self, path: &Path) -> io::Result<EntryKind>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        std::fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect()
    }

    fn symlink_metadata(&self, path: &Path) -> io::Result<EntryKind> {
        let file_type = std::fs::symlink_metadata(path)?.file_type();
        Ok(EntryKind {
            is_dir: file_type.is_dir(),
            is_symlink: file_type.is_symlink(),
        })
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        (**self).read_dir(dir)
    }

    fn symlink_metadata(&self, path: &Path) -> io::Result<EntryKind> {
        (**self).symlink_metadata(path)
    }
}
