mod backport;
mod cli;
mod error;
mod event;
mod progress;
mod ui;
mod update;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Update {
            version,
            changelog,
            activation_label,
            new_version_line,
            event_file,
            verbose,
        } => update::execute(
            version,
            changelog,
            activation_label,
            new_version_line,
            event_file,
            verbose,
        ),
        Commands::Backport {
            version,
            original_pr,
            changelog,
            token,
            new_version_line,
            event_file,
            verbose,
        } => backport::execute(
            version,
            original_pr,
            changelog,
            token,
            new_version_line,
            event_file,
            verbose,
        ),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
