use thiserror::Error;

/// Errors raised while fetching pull request artifacts
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Git2 error: {0}")]
    Git2Error(#[from] git2::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to download pull request diff: {0}")]
    DownloadError(String),

    #[error("Failed to clone repository: {0}")]
    CloneError(String),

    #[error("Failed to fetch pull request head: {0}")]
    FetchError(String),

    #[error("Checkout error: {0}")]
    CheckoutError(String),

    #[error("Other error: {0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<GitError>),
}

impl GitError {
    /// Add context to an error
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        GitError::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            GitError::Git2Error(e) => {
                // Keep the message, drop the class and code details
                let msg = e.to_string();
                msg.split(';').next().map_or_else(
                    || format!("Git error: {msg}"),
                    |main_msg| format!("Git error: {}", main_msg.trim()),
                )
            }
            GitError::IoError(e) => format!("I/O error: {e}"),
            GitError::DownloadError(msg) => format!("Diff download failed: {msg}"),
            GitError::CloneError(msg) => format!("Clone failed: {msg}"),
            GitError::FetchError(msg) => format!("Fetching the pull request head failed: {msg}"),
            GitError::CheckoutError(msg) => format!("Checkout failed: {msg}"),
            GitError::Other(msg) => msg.clone(),
            GitError::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, GitError>;
