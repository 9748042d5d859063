//! Depth-first file lookup.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::fs::{FileSystem, OsFileSystem};

/// Directories that are never listed: device, kernel and network pseudo
/// filesystems whose trees are endless or meaningless to search.
pub const VIRTUAL_ROOTS: &[&str] = &["/dev", "/sys", "/proc", "/net"];

/// A configured file search.
///
/// The search is a strict pre-order depth-first walk in listing order. The
/// first entry whose name equals the target wins, whether it is found
/// directly or inside an earlier sibling's subtree. Symbolic links are
/// never followed and [`VIRTUAL_ROOTS`] are never listed.
///
/// Filesystem errors are absorbed: a directory that cannot be listed
/// contributes nothing, and an entry whose metadata cannot be read is
/// skipped. Neither stops the rest of the search.
///
/// # Example
///
/// ```rust,no_run
/// use tessel_probe::FileProbe;
///
/// let probe = FileProbe::new().skip_dir("/mnt");
/// if let Some(path) = probe.find("/usr/share", "xterm-256color") {
///     println!("terminfo at {}", path.display());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FileProbe<F = OsFileSystem> {
    fs: F,
    skipped: Vec<PathBuf>,
}

impl FileProbe<OsFileSystem> {
    /// Creates a probe over the real filesystem.
    pub fn new() -> Self {
        Self::with_fs(OsFileSystem)
    }
}

impl Default for FileProbe<OsFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> FileProbe<F> {
    /// Creates a probe over the given filesystem capability.
    pub fn with_fs(fs: F) -> Self {
        Self {
            fs,
            skipped: VIRTUAL_ROOTS.iter().map(PathBuf::from).collect(),
        }
    }

    /// Adds a directory that must never be listed, returning the probe for
    /// chaining. The virtual roots stay in place.
    pub fn skip_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.skipped.push(dir.into());
        self
    }

    /// Returns the directories this probe refuses to list.
    pub fn skipped_dirs(&self) -> &[PathBuf] {
        &self.skipped
    }

    /// Searches `start` for an entry named `target`.
    ///
    /// Returns the path of the first match, or `None` if nothing matched or
    /// the tree could not be read.
    pub fn find(&self, start: impl AsRef<Path>, target: impl AsRef<OsStr>) -> Option<PathBuf> {
        let start = start.as_ref();
        let target = target.as_ref();
        let found = self.search(start, target);
        match &found {
            Some(path) => debug!(file = ?target, path = %path.display(), "file probe matched"),
            None => debug!(file = ?target, start = %start.display(), "file probe found nothing"),
        }
        found
    }

    fn search(&self, dir: &Path, target: &OsStr) -> Option<PathBuf> {
        if self.skipped.iter().any(|skip| skip == dir) {
            trace!(dir = %dir.display(), "skipping excluded directory");
            return None;
        }

        let names = match self.fs.read_dir(dir) {
            Ok(names) => names,
            Err(err) => {
                trace!(dir = %dir.display(), error = %err, "cannot list directory");
                return None;
            }
        };

        for name in names {
            let path = dir.join(&name);
            if name.as_os_str() == target {
                return Some(path);
            }

            let kind = match self.fs.symlink_metadata(&path) {
                Ok(kind) => kind,
                Err(err) => {
                    trace!(path = %path.display(), error = %err, "cannot stat entry");
                    continue;
                }
            };

            if kind.is_traversable() {
                if let Some(found) = self.search(&path, target) {
                    return Some(found);
                }
            }
        }

        None
    }
}

/// Searches the real filesystem under `start` for an entry named `target`.
///
/// Shorthand for `FileProbe::new().find(start, target)`.
pub fn find_file(start: impl AsRef<Path>, target: impl AsRef<OsStr>) -> Option<PathBuf> {
    FileProbe::new().find(start, target)
}
