// Project name validation for the scaffolder

use crate::utils::error::{Result, ScaffoldError};

/// Validate a trimmed project name before any filesystem mutation.
///
/// The name becomes both the root directory and a substitution value in
/// generated files, so anything that could escape the working directory
/// is rejected up front.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ScaffoldError::EmptyName);
    }

    // Reject path traversal attempts
    if name.contains("..") || name.contains('/') || name.contains('\\') {
        return Err(ScaffoldError::InvalidName(name.to_string()));
    }

    Ok(())
}
