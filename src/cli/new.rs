use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};

use crate::services::scaffolder::scaffold;
use crate::utils::error::Result;

/// Scaffold a new FastAPI project tree
#[derive(Debug)]
pub struct NewCommand {
    /// Project name; `None` means ask on stdin
    pub name: Option<String>,

    /// Output JSON instead of human-readable text
    pub json: bool,
}

/// JSON response format for the scaffold run
#[derive(Debug, Serialize, Deserialize)]
pub struct ScaffoldResponse {
    pub status: String,
    pub project_name: String,
    pub root: String,
    pub dirs_created: usize,
    pub files_written: usize,
}

impl NewCommand {
    /// Execute the scaffold command
    pub fn run(&self) -> Result<()> {
        let raw_name = match &self.name {
            Some(name) => name.clone(),
            None => prompt_for_name()?,
        };

        let report = scaffold(&raw_name)?;

        if self.json {
            let response = ScaffoldResponse {
                status: "success".to_string(),
                project_name: report.project_name.clone(),
                root: report.root.display().to_string(),
                dirs_created: report.dirs_created,
                files_written: report.files_written,
            };

            let json_output = serde_json::to_string_pretty(&response)?;
            println!("{json_output}");
        } else {
            println!(
                "FastAPI project structure created successfully for {}!",
                report.project_name
            );
        }

        Ok(())
    }
}

/// Ask for the project name on stdin. The raw line is returned untrimmed;
/// the scaffolder owns trimming and validation.
fn prompt_for_name() -> Result<String> {
    print!("Enter your project name: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(line)
}

#[cfg(test)]
mod tests {
    use crate::cli::Cli;
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_parses_positional_name_and_json_flag() {
        let cli = Cli::try_parse_from(["fsc", "demo", "--json"]).unwrap();
        let cmd = NewCommand::from(cli);

        assert_eq!(cmd.name.as_deref(), Some("demo"));
        assert!(cmd.json);
    }

    #[test]
    fn test_cli_defaults_to_interactive_prompt() {
        let cli = Cli::try_parse_from(["fsc"]).unwrap();
        let cmd = NewCommand::from(cli);

        assert!(cmd.name.is_none());
        assert!(!cmd.json);
    }

    #[test]
    fn test_cli_rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["fsc", "--force"]).is_err());
    }
}
