use crate::error::Result;
use crate::event::EventPayload;
use crate::ui;
use changelog::{Changelog, DependencyEntry, DEPENDENCY_SECTION};
use std::path::PathBuf;

pub fn execute(
    version: String,
    changelog_path: PathBuf,
    activation_label: String,
    new_version_line: usize,
    event_file: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    if activation_label.is_empty() {
        ui::warning_message("No activation label configured, nothing to do");
        return Ok(());
    }

    let payload = EventPayload::load(event_file.as_deref())?;

    if !payload.matches_label(&activation_label)? {
        ui::info_message(&format!(
            "Pull request does not carry the '{activation_label}' label, skipping changelog update"
        ));
        return Ok(());
    }

    let pull_request = payload.pull_request()?;
    let entry = DependencyEntry::from_title(pull_request.number, &pull_request.title)?;

    if verbose {
        ui::detail_message(&format!(
            "Recording bump of '{}' from {} to {}",
            entry.package, entry.old_version, entry.new_version
        ));
    }

    let line = entry.changelog_line(&payload.repository_url()?);

    let mut document = Changelog::new(&changelog_path)?;
    let parsed = document.parse_for_entry(&version, DEPENDENCY_SECTION)?;

    if verbose {
        ui::detail_message(&format!(
            "Inserting at line {} (version heading {}, section heading {})",
            parsed.line + 1,
            if parsed.version_found { "found" } else { "new" },
            if parsed.section_found { "found" } else { "new" },
        ));
    }

    // Line numbers are configured 1-indexed, contents are 0-indexed
    document.insert_entry(
        &line,
        DEPENDENCY_SECTION,
        &version,
        new_version_line.saturating_sub(1),
        &parsed,
    )?;

    ui::success_message(&format!(
        "Added entry for pull request #{} to {}",
        pull_request.number,
        changelog_path.display()
    ));

    Ok(())
}
