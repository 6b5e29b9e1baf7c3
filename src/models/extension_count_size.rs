use ahash::AHashMap;
use std::fmt;

use crate::models::{Collector, CountSize, ObserveError, SortOrder, Visit};
use crate::utils::{SizeFormat, extension_of};

/// Count and cumulative size of regular files per extension.
///
/// The empty string is the key for files without an extension.
#[derive(Debug, Clone, Default)]
pub struct ExtensionCountSize {
    counts: AHashMap<String, CountSize>,
}

impl ExtensionCountSize {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, extension: &str, size: u64) {
        self.counts.entry(extension.to_string()).or_default().record(size);
    }

    #[must_use]
    pub fn get(&self, extension: &str) -> Option<&CountSize> {
        self.counts.get(extension)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[must_use]
    pub fn sorted(&self, order: SortOrder) -> Vec<(&str, &CountSize)> {
        let mut rows: Vec<(&str, &CountSize)> = self.counts.iter().map(|(k, v)| (k.as_str(), v)).collect();
        rows.sort_unstable_by(|a, b| order.compare(*a, *b));
        rows
    }

    #[must_use]
    pub fn sort_keys(&self, order: SortOrder) -> Vec<&str> {
        self.sorted(order).into_iter().map(|(key, _)| key).collect()
    }

    /// Renders one `<ext>: <count> total, <size>` line per extension.
    #[must_use]
    pub fn render(&self, order: SortOrder, sizes: SizeFormat) -> String {
        self.sorted(order)
            .into_iter()
            .map(|(ext, cs)| format!("{ext}: {}", cs.format(sizes)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Collector for ExtensionCountSize {
    fn observe(&mut self, visit: &Visit<'_>) -> Result<(), ObserveError> {
        let entry = visit.accessible()?;
        if entry.is_file() {
            self.record(&extension_of(&entry.path), entry.size);
        }
        Ok(())
    }
}

impl fmt::Display for ExtensionCountSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(SortOrder::default(), SizeFormat::default()))
    }
}
