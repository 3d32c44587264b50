// Common error types for FSC

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Project name cannot be empty!")]
    EmptyName,

    #[error("Invalid project name '{0}' - cannot contain path separators or '..'.\n\nProject names should be simple directory names:\n  ✓ my-api\n  ✓ orders_service\n  ✗ ../my-api")]
    InvalidName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Terminal-facing rendering of a `ScaffoldError`.
///
/// Name validation fails before any filesystem mutation and exits with 1;
/// everything that fails mid-run exits with 2.
pub struct UserError {
    pub message: String,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_scaffold_error(err: &ScaffoldError) -> Self {
        let exit_code = match err {
            ScaffoldError::EmptyName | ScaffoldError::InvalidName(_) => 1,
            ScaffoldError::Io(_) | ScaffoldError::Json(_) => 2,
        };

        Self {
            message: err.to_string(),
            exit_code,
        }
    }

    pub fn print(&self) {
        eprintln!("{}", self.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_exit_with_1() {
        let err = UserError::from_scaffold_error(&ScaffoldError::EmptyName);
        assert_eq!(err.exit_code, 1);
        assert_eq!(err.message, "Project name cannot be empty!");

        let err =
            UserError::from_scaffold_error(&ScaffoldError::InvalidName("../x".to_string()));
        assert_eq!(err.exit_code, 1);
        assert!(err.message.contains("Invalid project name '../x'"));
    }

    #[test]
    fn test_io_errors_exit_with_2() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = UserError::from_scaffold_error(&ScaffoldError::Io(io));
        assert_eq!(err.exit_code, 2);
        assert!(err.message.starts_with("IO error:"));
    }
}
