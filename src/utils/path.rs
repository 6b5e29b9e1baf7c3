use std::path::{Path, PathBuf};

/// Returns the suffix of the final path segment starting at its last `.`.
///
/// Unlike [`Path::extension`], the dot is kept and dotfiles count as an
/// extension (`.bashrc`). Names without a dot yield an empty string.
#[must_use]
pub fn extension_of(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return String::new();
    };
    let name = name.to_string_lossy();
    name.rfind('.').map_or_else(String::new, |idx| name[idx..].to_string())
}

/// Returns the directory containing `path`, or `.` for a bare file name.
#[must_use]
pub fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        Some(_) => PathBuf::from("."),
        None => path.to_path_buf(),
    }
}
