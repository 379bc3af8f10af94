use thiserror::Error;

/// Errors that can occur when working with changelogs
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read or write changelog file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Unable to extract a dependency entry from pull request title: {0}")]
    MalformedTitle(String),

    #[error("Failed to locate changelog entry in diff: {0}")]
    DiffLocationNotFound(String),

    #[error("Changelog entry line {0} is beyond the end of the file ({1} lines)")]
    EntryLineOutOfRange(usize, usize),

    #[error("Changelog entry at line {0} is empty")]
    EmptyEntry(usize),

    #[error("No section heading found above changelog entry at line {0}")]
    MissingSectionHeading(usize),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<ChangelogError>),
}

impl ChangelogError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ReadError(e) => format!("File operation failed: {e}"),
            Self::MalformedTitle(title) => {
                format!("Unable to extract a dependency entry from pull request title: '{title}'")
            }
            Self::DiffLocationNotFound(msg) => {
                format!("Failed to locate changelog entry in diff: {msg}")
            }
            Self::EntryLineOutOfRange(line, len) => {
                format!("Changelog entry line {line} is beyond the end of the file ({len} lines)")
            }
            Self::EmptyEntry(line) => format!("Changelog entry at line {line} is empty"),
            Self::MissingSectionHeading(line) => {
                format!("No section heading found above changelog entry at line {line}")
            }
            Self::RegexError(e) => format!("Regular expression error: {e}"),
            Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}
