// CLI module for command-line interface

pub mod new;

use clap::Parser;

pub use self::new::NewCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "fsc")]
#[command(about = "A project scaffolding generator for enterprise FastAPI applications")]
#[command(long_about = r#"FSC (FastAPI Structure Creator) generates a ready-to-build FastAPI
project skeleton: application entrypoint, settings module, test stub,
dependency manifest, and container build files, laid out the way an
enterprise codebase organizes them.

Run it with no arguments to be prompted for the project name, or pass
the name directly. Rerunning over an existing project recreates the
boilerplate files in place.

Examples:
  fsc                     Prompt for a project name interactively
  fsc orders-api          Scaffold ./orders-api without prompting
  fsc orders-api --json   Emit a machine-readable summary"#)]
#[command(version)]
pub struct Cli {
    /// Project name (omit to be prompted interactively)
    pub name: Option<String>,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

impl From<Cli> for NewCommand {
    fn from(cli: Cli) -> Self {
        Self {
            name: cli.name,
            json: cli.json,
        }
    }
}
