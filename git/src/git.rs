pub mod error;
pub mod remote;

pub use error::{GitError, Result};
pub use remote::{GitHubRemote, PullRequestSource};
