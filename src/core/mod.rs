mod dispatcher;
mod report;
mod walker;

pub use dispatcher::Dispatcher;
pub use report::Report;
pub use walker::{ScanError, WalkSummary, Walker};
