use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Changelog error: {0}")]
    Changelog(#[from] changelog::ChangelogError),

    #[error("Git error: {0}")]
    Git(#[from] git::error::GitError),

    #[error("Failed to parse event payload: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Anyhow error: {0}")]
    AnyhowError(#[from] anyhow::Error),

    #[error("Event payload has no '{0}' field")]
    MissingPayloadField(&'static str),

    #[error("No event payload given and GITHUB_EVENT_PATH is not set")]
    MissingEventFile,

    #[error("No access token given and GITHUB_TOKEN is not set")]
    MissingToken,

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<CliError>),
}

impl CliError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Changelog(err) => err.user_message(),
            Self::Git(err) => err.user_message(),
            Self::JsonParseError(err) => format!("Failed to parse event payload: {err}"),
            Self::AnyhowError(err) => format!("Error: {err}"),
            Self::MissingPayloadField(field) => {
                format!("Event payload has no '{field}' field")
            }
            Self::MissingEventFile => {
                "No event payload given; pass --event-file or set GITHUB_EVENT_PATH".to_string()
            }
            Self::MissingToken => {
                "No access token given; pass --token or set GITHUB_TOKEN".to_string()
            }
            Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
