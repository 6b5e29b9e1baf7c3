use std::fmt;

use crate::utils::SizeFormat;

/// Number of occurrences paired with their cumulative size in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountSize {
    pub count: u64,
    pub size: u64,
}

impl CountSize {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, size: u64) {
        self.count += 1;
        self.size = self.size.saturating_add(size);
    }

    #[must_use]
    pub fn format(&self, sizes: SizeFormat) -> String {
        format!("{} total, {}", self.count, sizes.format(self.size))
    }
}

impl fmt::Display for CountSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(SizeFormat::default()))
    }
}
