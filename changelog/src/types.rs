use crate::error::ChangelogError;

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// Where a new entry belongs in the document, as computed by the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResult {
    /// 0-based offset at which the entry text should be spliced in
    pub line: usize,
    /// Whether the target version heading already exists
    pub version_found: bool,
    /// Whether the target section heading was seen after the version heading
    pub section_found: bool,
}

/// A published entry recovered from a changelog, together with the section
/// heading it was filed under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveredEntry {
    pub section: String,
    pub entry: String,
}
