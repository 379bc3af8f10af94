use crate::types::Result;
use regex::Regex;

/// Builds the exact-match pattern for one version's heading.
///
/// The version text is escaped, so `1.2.3` matches `## [1.2.3]` and nothing
/// else. Compiled per call from the caller's version string.
pub fn build_version_pattern(version: &str) -> Result<Regex> {
    let escaped_version = regex::escape(version);
    Ok(Regex::new(&format!(r"^## \[{escaped_version}\]"))?)
}
