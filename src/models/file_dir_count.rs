use pluralizer::pluralize;
use std::fmt;

use crate::models::{Collector, EntryKind, ObserveError, Visit};

/// Splits visited entries into regular files, directories and everything else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileDirCount {
    files: u64,
    directories: u64,
    other: u64,
}

impl FileDirCount {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&mut self, kind: EntryKind) {
        match kind {
            EntryKind::File => self.files += 1,
            EntryKind::Directory => self.directories += 1,
            EntryKind::Other => self.other += 1,
        }
    }

    #[must_use]
    pub const fn files(&self) -> u64 {
        self.files
    }

    #[must_use]
    pub const fn directories(&self) -> u64 {
        self.directories
    }

    #[must_use]
    pub const fn other(&self) -> u64 {
        self.other
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.files + self.directories + self.other
    }
}

impl Collector for FileDirCount {
    fn observe(&mut self, visit: &Visit<'_>) -> Result<(), ObserveError> {
        let entry = visit.accessible()?;
        self.count(entry.kind);
        Ok(())
    }
}

fn counted(noun: &str, count: u64) -> String {
    pluralize(noun, isize::try_from(count).unwrap_or(isize::MAX), true)
}

impl fmt::Display for FileDirCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}",
            counted("file", self.files),
            counted("directory", self.directories)
        )?;
        if self.other > 0 {
            write!(f, ", {}", counted("other", self.other))?;
        }
        Ok(())
    }
}
