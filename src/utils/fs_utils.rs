// File system utilities

use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Create a directory and any missing parents. Existing directories are
/// left untouched.
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Create the parent directory of a file path if it has one.
pub fn ensure_parent_exists(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory_exists(parent)?;
        }
    }
    Ok(())
}
