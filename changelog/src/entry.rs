use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ChangelogError;
use crate::types::Result;
use crate::utils::ENTRY_PR_NUMBER_PATTERN;

/// Section heading under which dependency bumps are filed
pub const DEPENDENCY_SECTION: &str = "### Dependencies";

/// Matches dependency bump pull request titles such as
/// `Bump serde from 1.0.100 to 1.0.200`
static BUMP_TITLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Bumps? (\S+?) from (\S*) to (\S*)").expect("Failed to compile bump title regex")
});

/// A dependency bump described by a pull request title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEntry {
    pub pull_request_number: u64,
    pub package: String,
    pub old_version: String,
    pub new_version: String,
}

impl DependencyEntry {
    /// Extracts the bumped package and version pair from a pull request
    /// title.
    ///
    /// # Errors
    /// Returns `MalformedTitle` when the title does not describe a bump,
    /// so the run aborts before any file is touched.
    pub fn from_title(pull_request_number: u64, title: &str) -> Result<Self> {
        let captures = BUMP_TITLE_PATTERN
            .captures(title)
            .ok_or_else(|| ChangelogError::MalformedTitle(title.to_string()))?;

        Ok(Self {
            pull_request_number,
            package: captures[1].to_string(),
            old_version: captures[2].to_string(),
            new_version: captures[3].to_string(),
        })
    }

    /// Renders the changelog line for this bump. The pull request number
    /// appears both as link text and inside the link target, which is the
    /// shape `renumber_entry` rewrites during backports.
    #[must_use]
    pub fn changelog_line(&self, repository_url: &str) -> String {
        format!(
            "- Bumps `{}` from {} to {} ([#{pr}]({repository_url}/pull/{pr}))",
            self.package,
            self.old_version,
            self.new_version,
            pr = self.pull_request_number,
        )
    }
}

/// Rewrites both pull request number tokens of a published entry to the
/// backport pull request number. Entries without the dual-number shape are
/// returned unchanged.
#[must_use]
pub fn renumber_entry(entry: &str, backport_pr_number: u64) -> String {
    match ENTRY_PR_NUMBER_PATTERN.captures(entry) {
        Some(captures) => format!(
            "{}{}{}{backport_pr_number}{}{backport_pr_number}{}",
            &captures[1], &captures[2], &captures[3], &captures[5], &captures[7],
        ),
        None => entry.to_string(),
    }
}
