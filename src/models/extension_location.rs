use ahash::AHashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::models::{Collector, CountSize, ObserveError, Visit};
use crate::utils::{SizeFormat, extension_of, parent_dir};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct ExtInDir {
    // Field order gives the (directory, extension) report ordering.
    dir: PathBuf,
    ext: String,
}

/// Count and cumulative size of regular files per extension per directory.
#[derive(Debug, Clone, Default)]
pub struct ExtensionLocation {
    counts: AHashMap<ExtInDir, CountSize>,
}

impl ExtensionLocation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, extension: &str, dir: &Path, size: u64) {
        let key = ExtInDir {
            dir: dir.to_path_buf(),
            ext: extension.to_string(),
        };
        self.counts.entry(key).or_default().record(size);
    }

    #[must_use]
    pub fn get(&self, extension: &str, dir: &Path) -> Option<&CountSize> {
        self.counts.get(&ExtInDir {
            dir: dir.to_path_buf(),
            ext: extension.to_string(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Rows ordered by directory, then extension.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&Path, &str, &CountSize)> {
        let mut rows: Vec<_> = self.counts.iter().collect();
        rows.sort_unstable_by(|a, b| a.0.cmp(b.0));
        rows.into_iter()
            .map(|(key, cs)| (key.dir.as_path(), key.ext.as_str(), cs))
            .collect()
    }

    /// Renders one `<dir>/*<ext>: <count> total, <size>` line per pair.
    #[must_use]
    pub fn render(&self, sizes: SizeFormat) -> String {
        self.sorted()
            .into_iter()
            .map(|(dir, ext, cs)| format!("{}: {}", dir.join(format!("*{ext}")).display(), cs.format(sizes)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Collector for ExtensionLocation {
    fn observe(&mut self, visit: &Visit<'_>) -> Result<(), ObserveError> {
        let entry = visit.accessible()?;
        if entry.is_file() {
            self.record(&extension_of(&entry.path), &parent_dir(&entry.path), entry.size);
        }
        Ok(())
    }
}

impl fmt::Display for ExtensionLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(SizeFormat::default()))
    }
}
