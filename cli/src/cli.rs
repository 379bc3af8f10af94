use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bumplog")]
#[command(
    author,
    version,
    about = "Keeps changelogs up to date from dependency bump and backport pull requests"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a changelog entry for the dependency bump described by the
    /// pull request event
    Update {
        /// Version whose section receives the new entry
        #[clap(long)]
        version: String,

        /// Path to the changelog file
        #[clap(long, default_value = "CHANGELOG.md")]
        changelog: PathBuf,

        /// Label that activates the update; `*` activates unconditionally
        /// and an empty value turns the update off
        #[clap(long, default_value = "dependabot")]
        activation_label: String,

        /// 1-based line at which a brand-new version section is inserted
        #[clap(long, default_value_t = 3)]
        new_version_line: usize,

        /// Path to the pull request event payload (defaults to GITHUB_EVENT_PATH)
        #[clap(long)]
        event_file: Option<PathBuf>,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Copy an already-published changelog entry from the original pull
    /// request into this release line, renumbered to the backport pull request
    Backport {
        /// Version whose section receives the backported entry
        #[clap(long)]
        version: String,

        /// Number of the pull request whose entry is being backported
        #[clap(long)]
        original_pr: u64,

        /// Path to the changelog file
        #[clap(long, default_value = "CHANGELOG.md")]
        changelog: PathBuf,

        /// Access token for fetching the original pull request (defaults to
        /// GITHUB_TOKEN)
        #[clap(long)]
        token: Option<String>,

        /// 1-based line at which a brand-new version section is inserted
        #[clap(long, default_value_t = 3)]
        new_version_line: usize,

        /// Path to the pull request event payload (defaults to GITHUB_EVENT_PATH)
        #[clap(long)]
        event_file: Option<PathBuf>,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },
}
