mod bytes;
mod path;

//
pub use bytes::{SizeFormat, format_bytes, format_decimal};
pub use path::{extension_of, parent_dir};
