// Two-phase project tree materialization: directories first, files second.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::layout::{PROJECT_DIRS, PROJECT_FILES};
use crate::utils::error::Result;
use crate::utils::fs_utils::{ensure_directory_exists, ensure_parent_exists};
use crate::utils::validation::validate_project_name;

/// Materializes the fixed project layout under a root directory named
/// after the project.
///
/// Construction validates the name; nothing touches the filesystem until
/// [`Scaffolder::run`] is called. The run is a strictly sequential batch:
/// an I/O failure aborts it and leaves whatever was already written in
/// place (no rollback).
pub struct Scaffolder {
    name: String,
    root: PathBuf,
}

/// Summary of a completed scaffold run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldReport {
    pub project_name: String,
    pub root: PathBuf,
    pub dirs_created: usize,
    pub files_written: usize,
}

impl Scaffolder {
    /// Create a scaffolder for `raw_name`, trimming surrounding whitespace
    /// and rejecting empty or path-escaping names before any mutation.
    pub fn new(raw_name: &str) -> Result<Self> {
        let name = raw_name.trim().to_string();
        validate_project_name(&name)?;

        let root = PathBuf::from(&name);
        Ok(Self { name, root })
    }

    /// Place the project root under `base` instead of the current
    /// working directory.
    #[must_use]
    pub fn rooted_at(mut self, base: &Path) -> Self {
        self.root = base.join(&self.name);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create every directory, then write every file. Rerunning over an
    /// existing tree succeeds: directories are left untouched and files
    /// are overwritten unconditionally.
    pub fn run(&self) -> Result<ScaffoldReport> {
        let dirs_created = self.create_directories()?;
        let files_written = self.create_files()?;

        Ok(ScaffoldReport {
            project_name: self.name.clone(),
            root: self.root.clone(),
            dirs_created,
            files_written,
        })
    }

    fn create_directories(&self) -> Result<usize> {
        ensure_directory_exists(&self.root)?;

        for dir in PROJECT_DIRS {
            ensure_directory_exists(&self.root.join(dir))?;
        }

        Ok(PROJECT_DIRS.len())
    }

    fn create_files(&self) -> Result<usize> {
        for template in PROJECT_FILES {
            let path = self.root.join(template.path);
            // Root-level files have no directory entry of their own
            ensure_parent_exists(&path)?;
            fs::write(&path, template.render(&self.name))?;
        }

        Ok(PROJECT_FILES.len())
    }
}

/// Validate `project_name` and materialize the full layout under it,
/// relative to the current working directory.
pub fn scaffold(project_name: &str) -> Result<ScaffoldReport> {
    Scaffolder::new(project_name)?.run()
}
