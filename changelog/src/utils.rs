use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a version heading regardless of which version it introduces
pub static VERSION_HEADING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^## \[.*\]").expect("Failed to compile version heading regex"));

/// Matches a section heading such as `### Dependencies` or `### Fixed`
pub static SECTION_HEADING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^### [a-zA-Z]+").expect("Failed to compile section heading regex"));

/// Matches the `diff --git` header that introduces the changelog file's
/// portion of a multi-file diff
pub static DIFF_CHANGELOG_HEADER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^diff --git .*CHANGELOG.*CHANGELOG.*")
        .expect("Failed to compile diff header regex")
});

/// Matches a unified diff hunk marker, capturing the new-file start line
pub static DIFF_HUNK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^@@ (?:-\d+,\d+)*\s*\+?(\d+),\d+").expect("Failed to compile hunk marker regex")
});

/// Matches an entry carrying a pull request number twice, once as the
/// bracketed link text and once inside the link target
pub static ENTRY_PR_NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^-)(.*)(\[#)(\d{4,6})(.*)(\d{4,6})(.*)")
        .expect("Failed to compile entry number regex")
});
