// FSC - FastAPI Structure Creator
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::layout::{FileTemplate, PROJECT_DIRS, PROJECT_FILES};
pub use services::scaffolder::{scaffold, ScaffoldReport, Scaffolder};
pub use utils::error::{Result, ScaffoldError};
