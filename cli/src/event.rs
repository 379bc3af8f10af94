use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::error::{CliError, Result};

/// Pull request webhook payload, reduced to the fields the commands read
#[derive(Debug, Deserialize)]
pub struct EventPayload {
    pull_request: Option<PullRequest>,
    repository: Option<Repository>,
}

#[derive(Debug, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    labels: Option<Vec<Label>>,
}

#[derive(Debug, Deserialize)]
pub struct Label {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Repository {
    pub name: String,
    pub owner: Owner,
    pub html_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Owner {
    pub login: String,
}

/// Coordinates of the backport pull request the command runs for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackportEntry {
    pub pull_request_number: u64,
    pub owner: String,
    pub repo: String,
}

impl PullRequest {
    /// Names of the labels attached to the pull request
    pub fn label_names(&self) -> Result<Vec<&str>> {
        let labels = self
            .labels
            .as_ref()
            .ok_or(CliError::MissingPayloadField("labels"))?;

        Ok(labels
            .iter()
            .filter_map(|label| label.name.as_deref())
            .collect())
    }
}

impl EventPayload {
    /// Reads the payload from `path`, falling back to the file named by
    /// `GITHUB_EVENT_PATH` when no path was given on the command line
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path: PathBuf = match path {
            Some(path) => path.to_path_buf(),
            None => env::var("GITHUB_EVENT_PATH")
                .map(PathBuf::from)
                .map_err(|_| CliError::MissingEventFile)?,
        };

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read event payload at {}", path.display()))?;

        Ok(serde_json::from_str(&raw)?)
    }

    pub fn pull_request(&self) -> Result<&PullRequest> {
        self.pull_request
            .as_ref()
            .ok_or(CliError::MissingPayloadField("pull_request"))
    }

    pub fn repository(&self) -> Result<&Repository> {
        self.repository
            .as_ref()
            .ok_or(CliError::MissingPayloadField("repository"))
    }

    /// Whether the pull request activates the update. `*` activates without
    /// looking at the labels at all; any other pattern must equal one of the
    /// label names exactly.
    pub fn matches_label(&self, pattern: &str) -> Result<bool> {
        if pattern == "*" {
            return Ok(true);
        }

        Ok(self
            .pull_request()?
            .label_names()?
            .iter()
            .any(|name| *name == pattern))
    }

    /// The repository's web URL, assembled from owner and name when the
    /// payload does not carry one
    pub fn repository_url(&self) -> Result<String> {
        let repository = self.repository()?;

        Ok(match &repository.html_url {
            Some(url) => url.clone(),
            None => format!(
                "https://github.com/{}/{}",
                repository.owner.login, repository.name
            ),
        })
    }

    /// The backport pull request's coordinates
    pub fn backport_entry(&self) -> Result<BackportEntry> {
        let pull_request = self.pull_request()?;
        let repository = self.repository()?;

        Ok(BackportEntry {
            pull_request_number: pull_request.number,
            owner: repository.owner.login.clone(),
            repo: repository.name.clone(),
        })
    }
}
