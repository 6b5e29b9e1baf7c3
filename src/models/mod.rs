mod collector;
mod count_size;
mod entry;
mod extension_count_size;
mod extension_location;
mod file_dir_count;
mod sort;

pub use collector::{Collector, ObserveError};
pub use count_size::CountSize;
pub use entry::{AccessError, Entry, EntryKind, Visit};
pub use extension_count_size::ExtensionCountSize;
pub use extension_location::ExtensionLocation;
pub use file_dir_count::FileDirCount;
pub use sort::SortOrder;
