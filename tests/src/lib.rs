//! Shared fixtures for the integration tests.

use std::fs;
use std::path::{Path, PathBuf};

/// A changelog with a current release and one older version
pub const SAMPLE_CHANGELOG: &str = "\
# Changelog

## [1.1.0]
### Dependencies
- Bumps `serde` from 1.0.100 to 1.0.150 ([#1150](https://github.com/acme/app/pull/1150))

## [1.0.0]
### Added
- Initial release
";

/// Writes `content` as CHANGELOG.md under `dir` and returns its path
pub fn write_changelog(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("CHANGELOG.md");
    fs::write(&path, content).expect("Failed to write changelog fixture");
    path
}
