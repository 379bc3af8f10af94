use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{GitError, Result};
use git2::Repository as GitRepository;

/// Read access to a pull request's artifacts on the hosting platform
pub trait PullRequestSource {
    /// Downloads the pull request's unified diff to `destination`
    fn fetch_diff(&self, pull_request: u64, destination: &Path) -> Result<()>;

    /// Clones the repository under `workdir`, checks out the pull request's
    /// head and returns the checkout directory
    fn checkout_head(&self, pull_request: u64, workdir: &Path) -> Result<PathBuf>;
}

/// Pull request access for a github.com repository, authenticated with an
/// access token embedded in the URL
pub struct GitHubRemote {
    owner: String,
    repo: String,
    token: String,
}

impl GitHubRemote {
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            token: token.into(),
        }
    }

    fn authenticated_url(&self, suffix: &str) -> String {
        format!(
            "https://x-access-token:{}@github.com/{}/{}{}",
            self.token, self.owner, self.repo, suffix
        )
    }
}

/// Runs a subprocess and maps a non-zero exit to `error` with the
/// command's stderr as the message
fn run(command: &mut Command, error: fn(String) -> GitError) -> Result<()> {
    let output = command.output().map_err(GitError::IoError)?;

    if !output.status.success() {
        return Err(error(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }

    Ok(())
}

impl PullRequestSource for GitHubRemote {
    fn fetch_diff(&self, pull_request: u64, destination: &Path) -> Result<()> {
        let url = self.authenticated_url(&format!("/pull/{pull_request}.diff"));

        // curl follows github.com's redirect to the diff content; git has no
        // equivalent for fetching a pull request's diff text
        let mut command = Command::new("curl");
        command
            .args(["-s", "-S", "-f", "-L", "--output"])
            .arg(destination)
            .arg(&url);

        run(&mut command, GitError::DownloadError)
    }

    fn checkout_head(&self, pull_request: u64, workdir: &Path) -> Result<PathBuf> {
        let clone_url = self.authenticated_url(".git");

        let mut clone = Command::new("git");
        clone.current_dir(workdir).args(["clone", &clone_url]);
        run(&mut clone, GitError::CloneError)?;

        let checkout_dir = workdir.join(&self.repo);
        let branch_name = format!("pr-{pull_request}");

        let mut fetch = Command::new("git");
        fetch.current_dir(&checkout_dir).args([
            "fetch",
            "origin",
            &format!("pull/{pull_request}/head:{branch_name}"),
        ]);
        run(&mut fetch, GitError::FetchError)?;

        checkout_branch(&checkout_dir, &branch_name)?;

        Ok(checkout_dir)
    }
}

/// Checks out a local branch of the repository at `repo_dir` and moves HEAD
/// to it. The networked clone and fetch go through the git CLI; from here on
/// everything is local, so git2 takes over.
fn checkout_branch(repo_dir: &Path, branch_name: &str) -> Result<()> {
    let repo = GitRepository::open(repo_dir)
        .map_err(|e| GitError::CheckoutError(format!("unable to open the fresh clone: {e}")))?;

    let branch_ref = format!("refs/heads/{branch_name}");

    let obj = repo.revparse_single(&branch_ref).map_err(|e| {
        GitError::CheckoutError(format!("branch '{branch_name}' did not resolve: {e}"))
    })?;

    repo.checkout_tree(&obj, None)
        .map_err(|e| GitError::CheckoutError(format!("branch '{branch_name}': {e}")))?;

    repo.set_head(&branch_ref)?;

    Ok(())
}
