use std::path::PathBuf;

use crate::models::{AccessError, Visit};

#[derive(Debug, thiserror::Error)]
pub enum ObserveError {
    #[error("skipped {}: {source}", path.display())]
    Skipped {
        path: PathBuf,
        #[source]
        source: AccessError,
    },
}

/// Accumulates statistics from every entry of a walk.
pub trait Collector {
    /// Records one visit.
    ///
    /// # Errors
    ///
    /// Returns an error when the visit could not be counted. The dispatcher
    /// discards it, so a failing collector never stops the others.
    fn observe(&mut self, visit: &Visit<'_>) -> Result<(), ObserveError>;
}
