use crate::error::{CliError, Result};
use crate::event::EventPayload;
use crate::progress::ProgressTracker;
use crate::ui;
use changelog::{renumber_entry, Changelog};
use git::remote::{GitHubRemote, PullRequestSource};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn execute(
    version: String,
    original_pr: u64,
    changelog_path: PathBuf,
    token: Option<String>,
    new_version_line: usize,
    event_file: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let payload = EventPayload::load(event_file.as_deref())?;
    let backport = payload.backport_entry()?;

    let token = token
        .or_else(|| env::var("GITHUB_TOKEN").ok())
        .ok_or(CliError::MissingToken)?;

    let mut progress = ProgressTracker::new("Changelog Backport").with_steps(vec![
        "Fetching original pull request diff".to_string(),
        "Locating changelog entry in diff".to_string(),
        "Checking out original pull request".to_string(),
        "Recovering published entry".to_string(),
        "Updating changelog".to_string(),
    ]);

    let remote = GitHubRemote::new(&backport.owner, &backport.repo, &token);
    let workdir = tempfile::tempdir()?;

    progress.start_step();
    let diff_path = workdir.path().join(format!("pr-{original_pr}.diff"));
    remote.fetch_diff(original_pr, &diff_path)?;
    progress.complete_step();

    progress.start_step();
    let diff = fs::read_to_string(&diff_path)?;
    let entry_line = changelog::entry_line_from_diff(&diff)?;
    if verbose {
        ui::detail_message(&format!(
            "Original entry was published at line {entry_line}"
        ));
    }
    progress.complete_step();

    progress.start_step();
    let checkout_dir = remote.checkout_head(original_pr, workdir.path())?;
    progress.complete_step();

    progress.start_step();
    let original = Changelog::new(checkout_dir.join(&changelog_path))
        .map_err(|e| CliError::Changelog(e).with_context("Failed to open the original changelog"))?;
    let recovered = original.entry_with_section_at(entry_line)?;
    let renumbered = renumber_entry(&recovered.entry, backport.pull_request_number);
    if verbose {
        ui::detail_message(&format!("Recovered entry under '{}'", recovered.section));
        ui::detail_message(&format!("Backporting as: {renumbered}"));
    }
    progress.complete_step();

    progress.start_step();
    let mut document = Changelog::new(&changelog_path)?;
    let parsed = document.parse_for_entry(&version, &recovered.section)?;
    // Line numbers are configured 1-indexed, contents are 0-indexed
    document.insert_entry(
        &renumbered,
        &recovered.section,
        &version,
        new_version_line.saturating_sub(1),
        &parsed,
    )?;
    progress.complete_step();

    progress.complete();
    ui::success_message(&format!(
        "Backported entry from pull request #{original_pr} as #{} into {}",
        backport.pull_request_number,
        changelog_path.display()
    ));

    Ok(())
}
