use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::core::Dispatcher;
use crate::models::{AccessError, Entry, EntryKind, Visit};

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Cannot access root path {}", path.display())]
    RootInaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Totals of a finished walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Visits dispatched, including the ones that carried an access error.
    pub visited: u64,
    pub errors: u64,
}

impl From<walkdir::Error> for AccessError {
    fn from(err: walkdir::Error) -> Self {
        Self::new(err.path().map(Path::to_path_buf), err.to_string())
    }
}

/// Depth-first traversal of a directory tree.
///
/// The root itself is not visited when it is a directory. Symlinks below the
/// root are reported as [`EntryKind::Other`] and not followed. Siblings are
/// visited in file-name order.
#[derive(Debug, Clone)]
pub struct Walker {
    root: PathBuf,
}

impl Walker {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Walks the tree, handing every entry to `dispatcher`.
    ///
    /// Entries that cannot be read are reported once as a warning, forwarded
    /// to the dispatcher as failed visits and the walk moves on.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::RootInaccessible`] if the root path cannot be
    /// stat'd, or is a directory whose listing cannot be read.
    pub fn walk(&self, dispatcher: &mut Dispatcher<'_>) -> Result<WalkSummary, ScanError> {
        let root_error = |source| ScanError::RootInaccessible {
            path: self.root.clone(),
            source,
        };
        let metadata = std::fs::metadata(&self.root).map_err(root_error)?;
        if metadata.is_dir() {
            std::fs::read_dir(&self.root).map_err(root_error)?;
        }

        info!("Walker: Starting walk of {:?}", self.root);

        let mut summary = WalkSummary::default();
        let mut walk = WalkDir::new(&self.root)
            .min_depth(usize::from(metadata.is_dir()))
            .sort_by_file_name()
            .into_iter();

        while let Some(result) = walk.next() {
            summary.visited += 1;
            let outcome = match result {
                Ok(dent) => to_entry(&dent).inspect_err(|_| {
                    // walkdir has already opened this directory; its listing
                    // would fail again for the same path.
                    if dent.file_type().is_dir() {
                        walk.skip_current_dir();
                    }
                }),
                Err(err) => Err(AccessError::from(err)),
            };

            match outcome {
                Ok(entry) => dispatcher.dispatch(&Visit::entry(&entry)),
                Err(error) => {
                    summary.errors += 1;
                    warn!("{error}");
                    let path = error.path().map_or_else(|| self.root.clone(), Path::to_path_buf);
                    dispatcher.dispatch(&Visit::failed(&path, &error));
                }
            }
        }

        debug!(
            "Walker: Finished {:?}: {} entries visited, {} errors",
            self.root, summary.visited, summary.errors
        );
        Ok(summary)
    }
}

fn to_entry(dent: &walkdir::DirEntry) -> Result<Entry, AccessError> {
    let metadata = dent.metadata()?;
    let kind = EntryKind::from_file_type(metadata.file_type());
    let size = if kind == EntryKind::File { metadata.len() } else { 0 };
    Ok(Entry::new(dent.path(), kind, size))
}
