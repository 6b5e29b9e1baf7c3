use std::path::Path;
use tracing::debug;

use crate::core::{Dispatcher, ScanError, WalkSummary, Walker};
use crate::models::{ExtensionCountSize, ExtensionLocation, FileDirCount, SortOrder};
use crate::utils::SizeFormat;

/// Everything gathered by one walk over a tree.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub file_dirs: FileDirCount,
    pub extensions: ExtensionCountSize,
    pub locations: ExtensionLocation,
    pub summary: WalkSummary,
}

impl Report {
    /// Walks `root` once with every collector subscribed.
    ///
    /// # Errors
    ///
    /// Fails only when the walk cannot start; see [`Walker::walk`].
    pub fn scan(root: &Path) -> Result<Self, ScanError> {
        let mut report = Self::default();
        let summary = {
            let mut dispatcher = Dispatcher::new();
            dispatcher
                .register_collector(&mut report.file_dirs)
                .register_collector(&mut report.extensions)
                .register_collector(&mut report.locations);
            Walker::new(root).walk(&mut dispatcher)?
        };
        report.summary = summary;

        debug!(
            "Report: {} ({} extensions, {} extension locations)",
            report.file_dirs,
            report.extensions.len(),
            report.locations.len()
        );
        Ok(report)
    }

    /// Renders the file/directory line, the extension block and the
    /// per-directory block, each terminated by a newline.
    #[must_use]
    pub fn render(&self, order: SortOrder, sizes: SizeFormat) -> String {
        format!(
            "{}\n{}\n{}\n",
            self.file_dirs,
            self.extensions.render(order, sizes),
            self.locations.render(sizes)
        )
    }
}
