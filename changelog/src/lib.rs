//! Reading, locating and patching of version-sectioned changelog files.
//!
//! The parser finds the line at which a new entry belongs for a given
//! version and section; the document type splices the entry in and rewrites
//! the file. Diff recovery locates an already-published entry from a pull
//! request diff so it can be copied into another release line.

pub mod core;
pub mod diff;
pub mod entry;
pub mod error;
pub mod parser;
pub mod regex_utils;
pub mod types;
pub mod utils;

pub use self::core::Changelog;
pub use diff::entry_line_from_diff;
pub use entry::{renumber_entry, DependencyEntry, DEPENDENCY_SECTION};
pub use error::ChangelogError;
pub use parser::Parser;
pub use types::{ParsedResult, RecoveredEntry, Result};
