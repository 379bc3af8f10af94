use crate::error::ChangelogError;
use crate::parser::Parser;
use crate::types::{ParsedResult, RecoveredEntry, Result};
use crate::utils::SECTION_HEADING_PATTERN;
use std::fs;
use std::path::{Path, PathBuf};

/// Line separator used when the document is serialized back to disk
const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// A changelog file held in memory as an ordered sequence of lines
///
/// Lines are 0-indexed internally; line numbers arriving from diff output
/// are 1-indexed and converted at the boundary.
pub struct Changelog {
    path: PathBuf,
    lines: Vec<String>,
}

impl Changelog {
    /// Creates a new Changelog instance from a file path
    ///
    /// # Errors
    /// Returns error if file cannot be read
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let raw_content = fs::read_to_string(&path).map_err(ChangelogError::ReadError)?;
        let lines = raw_content.lines().map(str::to_string).collect();

        Ok(Self { path, lines })
    }

    /// Computes where an entry for `version` under `section_heading` should
    /// be spliced in. Read-only, so it can be run any number of times.
    ///
    /// # Errors
    /// Returns an error if the version pattern cannot be built
    pub fn parse_for_entry(&self, version: &str, section_heading: &str) -> Result<ParsedResult> {
        Ok(Parser::new(version, section_heading)?.parse(&self.lines))
    }

    /// Splices `entry` into the document and rewrites the whole file.
    ///
    /// Missing landmarks are synthesized on the way in: without the section,
    /// the section heading is prepended to the entry; without the version, a
    /// complete new block (version heading, section heading, entry, blank
    /// separator) is written at `default_version_line` instead of the
    /// parsed offset.
    ///
    /// # Errors
    /// Returns an error if the rewritten document cannot be written back
    pub fn insert_entry(
        &mut self,
        entry: &str,
        section_heading: &str,
        version: &str,
        default_version_line: usize,
        parsed: &ParsedResult,
    ) -> Result<()> {
        let mut text = entry.to_string();
        let mut offset = parsed.line;

        if !parsed.section_found {
            text = format!("{section_heading}{LINE_ENDING}{text}");
        }
        if !parsed.version_found {
            text = format!("## [{version}]{LINE_ENDING}{text}{LINE_ENDING}");
            offset = default_version_line;
        }

        // The composed text spans several physical lines but occupies a
        // single slot until serialization fans it out
        let offset = offset.min(self.lines.len());
        self.lines.insert(offset, text);

        self.write()
    }

    /// Returns the entry at a 1-indexed line number together with the most
    /// recently seen section heading above it.
    ///
    /// Section tracking runs over the whole document and is not reset at
    /// version boundaries.
    ///
    /// # Errors
    /// Returns an error when the line is beyond the end of the file, blank,
    /// or not preceded by any section heading
    pub fn entry_with_section_at(&self, line_number: usize) -> Result<RecoveredEntry> {
        let mut section: Option<&String> = None;

        for (index, line) in self.lines.iter().enumerate() {
            if SECTION_HEADING_PATTERN.is_match(line) {
                section = Some(line);
            }

            if index + 1 == line_number {
                if line.trim().is_empty() {
                    return Err(ChangelogError::EmptyEntry(line_number));
                }
                return match section {
                    Some(heading) => Ok(RecoveredEntry {
                        section: heading.clone(),
                        entry: line.clone(),
                    }),
                    None => Err(ChangelogError::MissingSectionHeading(line_number)),
                };
            }
        }

        Err(ChangelogError::EntryLineOutOfRange(
            line_number,
            self.lines.len(),
        ))
    }

    /// Gets the path to the changelog file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the document's lines
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn write(&self) -> Result<()> {
        let mut content = self.lines.join(LINE_ENDING);
        content.push_str(LINE_ENDING);

        fs::write(&self.path, content).map_err(ChangelogError::ReadError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DOCUMENT: &str = "\
# Changelog

## [1.1.0]
### Dependencies
- Bumps `serde` from 1.0.100 to 1.0.150 ([#1150](https://github.com/acme/app/pull/1150))

## [1.0.0]
### Added
- Initial release
";

    fn create_test_changelog(dir: &TempDir) -> Changelog {
        let path = dir.path().join("CHANGELOG.md");
        fs::write(&path, DOCUMENT).unwrap();
        Changelog::new(path).unwrap()
    }

    fn read_lines(changelog: &Changelog) -> Vec<String> {
        let content = fs::read_to_string(changelog.path()).unwrap();
        content.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_insert_appends_to_existing_section_block() {
        let dir = TempDir::new().unwrap();
        let mut changelog = create_test_changelog(&dir);
        let parsed = changelog.parse_for_entry("1.1.0", "### Dependencies").unwrap();

        changelog
            .insert_entry("- New entry", "### Dependencies", "1.1.0", 2, &parsed)
            .unwrap();

        let lines = read_lines(&changelog);
        assert_eq!(lines[6], "- New entry");
        assert_eq!(lines[7], "## [1.0.0]");
    }

    #[test]
    fn test_insert_synthesizes_section_heading() {
        let dir = TempDir::new().unwrap();
        let mut changelog = create_test_changelog(&dir);
        let parsed = changelog.parse_for_entry("1.1.0", "### Security").unwrap();
        assert!(parsed.version_found);
        assert!(!parsed.section_found);

        changelog
            .insert_entry("- Patched CVE", "### Security", "1.1.0", 2, &parsed)
            .unwrap();

        let lines = read_lines(&changelog);
        assert_eq!(lines[3], "### Security");
        assert_eq!(lines[4], "- Patched CVE");
        assert_eq!(lines[5], "### Dependencies");
    }

    #[test]
    fn test_insert_synthesizes_version_block_at_default_line() {
        let dir = TempDir::new().unwrap();
        let mut changelog = create_test_changelog(&dir);
        let parsed = changelog.parse_for_entry("1.2.0", "### Dependencies").unwrap();
        assert!(!parsed.version_found);

        changelog
            .insert_entry("- New entry", "### Dependencies", "1.2.0", 2, &parsed)
            .unwrap();

        let lines = read_lines(&changelog);
        assert_eq!(lines[2], "## [1.2.0]");
        assert_eq!(lines[3], "### Dependencies");
        assert_eq!(lines[4], "- New entry");
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "## [1.1.0]");
    }

    #[test]
    fn test_insert_clamps_default_line_beyond_end_of_file() {
        let dir = TempDir::new().unwrap();
        let mut changelog = create_test_changelog(&dir);
        let parsed = changelog.parse_for_entry("1.2.0", "### Dependencies").unwrap();

        changelog
            .insert_entry("- New entry", "### Dependencies", "1.2.0", 500, &parsed)
            .unwrap();

        let lines = read_lines(&changelog);
        assert_eq!(lines[8], "- Initial release");
        assert_eq!(lines[9], "## [1.2.0]");
        assert_eq!(lines[10], "### Dependencies");
        assert_eq!(lines[11], "- New entry");
    }

    #[test]
    fn test_reparse_after_insert_points_after_new_entry() {
        let dir = TempDir::new().unwrap();
        let mut changelog = create_test_changelog(&dir);
        let parsed = changelog.parse_for_entry("1.1.0", "### Dependencies").unwrap();
        let inserted_at = parsed.line;

        changelog
            .insert_entry("- New entry", "### Dependencies", "1.1.0", 2, &parsed)
            .unwrap();

        let reopened = Changelog::new(changelog.path()).unwrap();
        let reparsed = reopened.parse_for_entry("1.1.0", "### Dependencies").unwrap();
        assert!(reparsed.section_found);
        assert_eq!(reparsed.line, inserted_at + 1);
    }

    #[test]
    fn test_insert_preserves_all_other_lines() {
        let dir = TempDir::new().unwrap();
        let mut changelog = create_test_changelog(&dir);
        let before: Vec<String> = changelog.lines().to_vec();
        let parsed = changelog.parse_for_entry("1.1.0", "### Dependencies").unwrap();
        let offset = parsed.line;

        changelog
            .insert_entry("- New entry", "### Dependencies", "1.1.0", 2, &parsed)
            .unwrap();

        let after = read_lines(&changelog);
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..offset], &before[..offset]);
        assert_eq!(&after[offset + 1..], &before[offset..]);
    }

    #[test]
    fn test_written_file_ends_with_newline() {
        let dir = TempDir::new().unwrap();
        let mut changelog = create_test_changelog(&dir);
        let parsed = changelog.parse_for_entry("1.1.0", "### Dependencies").unwrap();

        changelog
            .insert_entry("- New entry", "### Dependencies", "1.1.0", 2, &parsed)
            .unwrap();

        let content = fs::read_to_string(changelog.path()).unwrap();
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_entry_with_section_at_returns_entry_and_heading() {
        let dir = TempDir::new().unwrap();
        let changelog = create_test_changelog(&dir);

        let recovered = changelog.entry_with_section_at(5).unwrap();

        assert_eq!(recovered.section, "### Dependencies");
        assert_eq!(
            recovered.entry,
            "- Bumps `serde` from 1.0.100 to 1.0.150 ([#1150](https://github.com/acme/app/pull/1150))"
        );
    }

    #[test]
    fn test_entry_with_section_at_uses_most_recent_heading() {
        let dir = TempDir::new().unwrap();
        let changelog = create_test_changelog(&dir);

        let recovered = changelog.entry_with_section_at(9).unwrap();

        assert_eq!(recovered.section, "### Added");
        assert_eq!(recovered.entry, "- Initial release");
    }

    #[test]
    fn test_entry_with_section_at_rejects_line_beyond_file() {
        let dir = TempDir::new().unwrap();
        let changelog = create_test_changelog(&dir);

        let result = changelog.entry_with_section_at(100);

        assert!(matches!(
            result,
            Err(ChangelogError::EntryLineOutOfRange(100, 9))
        ));
    }

    #[test]
    fn test_entry_with_section_at_rejects_blank_line() {
        let dir = TempDir::new().unwrap();
        let changelog = create_test_changelog(&dir);

        let result = changelog.entry_with_section_at(6);

        assert!(matches!(result, Err(ChangelogError::EmptyEntry(6))));
    }

    #[test]
    fn test_entry_with_section_at_requires_a_preceding_heading() {
        let dir = TempDir::new().unwrap();
        let changelog = create_test_changelog(&dir);

        let result = changelog.entry_with_section_at(1);

        assert!(matches!(
            result,
            Err(ChangelogError::MissingSectionHeading(1))
        ));
    }

    #[test]
    fn test_insert_into_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CHANGELOG.md");
        fs::write(&path, "").unwrap();
        let mut changelog = Changelog::new(&path).unwrap();
        let parsed = changelog.parse_for_entry("1.0.0", "### Dependencies").unwrap();
        assert!(!parsed.version_found);

        changelog
            .insert_entry("- New entry", "### Dependencies", "1.0.0", 2, &parsed)
            .unwrap();

        let lines = read_lines(&changelog);
        assert_eq!(lines[0], "## [1.0.0]");
        assert_eq!(lines[1], "### Dependencies");
        assert_eq!(lines[2], "- New entry");
    }
}
