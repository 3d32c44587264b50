// FSC - FastAPI Structure Creator
// Main CLI entry point

use clap::Parser;
use fsc::cli::{Cli, NewCommand};
use fsc::utils::error::UserError;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = NewCommand::from(cli).run();

    if let Err(err) = result {
        let user_error = UserError::from_scaffold_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
