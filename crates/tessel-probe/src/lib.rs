//! # tessel-probe - locate a file by name
//!
//! A depth-first search for the first entry with a given name beneath a
//! starting directory. Symbolic links are never followed, virtual
//! filesystem roots (`/dev`, `/sys`, `/proc`, `/net`) are never listed, and
//! filesystem errors only prune the part of the tree they affect.
//!
//! ```rust,no_run
//! use tessel_probe::find_file;
//!
//! match find_file("/usr/share/terminfo", "xterm-256color") {
//!     Some(path) => println!("found {}", path.display()),
//!     None => println!("not found"),
//! }
//! ```
//!
//! The filesystem is reached through the [`FileSystem`] trait, so the
//! search can run over any tree that can list names and report entry types.

mod fs;
mod probe;

pub use fs::{EntryKind, FileSystem, OsFileSystem};
pub use probe::{find_file, FileProbe, VIRTUAL_ROOTS};
