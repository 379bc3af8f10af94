use regex::Regex;

use crate::regex_utils::build_version_pattern;
use crate::types::{ParsedResult, Result};
use crate::utils::VERSION_HEADING_PATTERN;

/// Scan progress while looking for the insertion point.
///
/// States only ever advance, `Seeking` through `Done`; a landmark found
/// once is never unfound by later lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// The target version heading has not been seen yet
    Seeking,
    /// Past the target version heading, section heading still pending
    InVersion,
    /// Past both headings, looking for the end of the version block
    InSection,
    /// Block boundary found, nothing can move the insertion point anymore
    Done,
}

/// Locates the insertion point for one entry in a version-sectioned document
#[derive(Debug)]
pub struct Parser {
    version_pattern: Regex,
    section_heading: String,
}

impl Parser {
    /// Creates a parser for one exact version and one section heading
    pub fn new(version: &str, section_heading: &str) -> Result<Self> {
        Ok(Self {
            version_pattern: build_version_pattern(version)?,
            section_heading: section_heading.to_string(),
        })
    }

    /// Computes the 0-based insertion offset for a new entry, together with
    /// whether the version and section headings already exist.
    ///
    /// A single forward pass over the lines. The result depends only on the
    /// input, so parsing the same document twice gives the same answer.
    #[must_use]
    pub fn parse(&self, lines: &[String]) -> ParsedResult {
        let mut result = ParsedResult {
            line: 0,
            version_found: false,
            section_found: false,
        };
        let mut state = ScanState::Seeking;

        for (index, line) in lines.iter().enumerate() {
            state = self.step(state, index, line, &mut result);
        }

        result
    }

    fn step(
        &self,
        state: ScanState,
        index: usize,
        line: &str,
        result: &mut ParsedResult,
    ) -> ScanState {
        match state {
            ScanState::Seeking if self.version_pattern.is_match(line) => {
                result.version_found = true;
                result.line = index + 1;
                ScanState::InVersion
            }
            ScanState::InVersion if line == self.section_heading => {
                result.section_found = true;
                result.line = index + 1;
                ScanState::InSection
            }
            ScanState::InSection if VERSION_HEADING_PATTERN.is_match(line) => {
                // Append at the end of the current block, right before the
                // next version heading
                result.line = index;
                ScanState::Done
            }
            ScanState::Seeking | ScanState::InVersion | ScanState::InSection => state,
            ScanState::Done => ScanState::Done,
        }
    }
}
