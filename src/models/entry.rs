use std::path::{Path, PathBuf};

use crate::models::ObserveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
    /// Anything that is neither a regular file nor a directory: symlinks,
    /// sockets, fifos, devices.
    Other,
}

impl EntryKind {
    #[must_use]
    pub fn from_file_type(file_type: std::fs::FileType) -> Self {
        if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

/// One filesystem node seen during a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Byte length; only meaningful for regular files.
    pub size: u64,
}

impl Entry {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind, size: u64) -> Self {
        Self {
            path: path.into(),
            kind,
            size,
        }
    }

    #[must_use]
    pub fn file(path: impl Into<PathBuf>, size: u64) -> Self {
        Self::new(path, EntryKind::File, size)
    }

    #[must_use]
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self::new(path, EntryKind::Directory, 0)
    }

    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self.kind, EntryKind::File)
    }
}

/// A path the walk could not stat or read.
///
/// Displays as the description of the underlying failure so it can be
/// reported verbatim on the diagnostic stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AccessError {
    path: Option<PathBuf>,
    message: String,
}

impl AccessError {
    #[must_use]
    pub fn new(path: Option<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// A single step of the walk as handed to every collector.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    pub path: &'a Path,
    pub outcome: Result<&'a Entry, &'a AccessError>,
}

impl<'a> Visit<'a> {
    #[must_use]
    pub fn entry(entry: &'a Entry) -> Self {
        Self {
            path: &entry.path,
            outcome: Ok(entry),
        }
    }

    #[must_use]
    pub fn failed(path: &'a Path, error: &'a AccessError) -> Self {
        Self {
            path,
            outcome: Err(error),
        }
    }

    /// Returns the visited entry, or the skip a collector should report when
    /// the entry could not be accessed.
    ///
    /// # Errors
    ///
    /// Returns [`ObserveError::Skipped`] if the walk attached an access error
    /// to this path.
    pub fn accessible(&self) -> Result<&'a Entry, ObserveError> {
        self.outcome.map_err(|source| ObserveError::Skipped {
            path: self.path.to_path_buf(),
            source: source.clone(),
        })
    }
}
