//! Error types for gitflow-core

use std::path::PathBuf;

use crate::prompt::PromptError;
use crate::validate::BranchNameProblem;

/// Result type for gitflow-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that end a workflow run
///
/// Every variant is fatal. Invalid interactive input never surfaces here; it
/// is answered with a warning and a new prompt.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The working directory is not inside a git work tree
    #[error("Not a git repository: {}", path.display())]
    NotARepository { path: PathBuf },

    /// A branch name supplied up front failed validation
    #[error("Invalid branch name '{name}': {problem}")]
    InvalidInput {
        name: String,
        problem: BranchNameProblem,
    },

    /// Fetch, divergence check, stash or pull against the upstream failed
    #[error("Sync with {upstream} failed during {operation}: {source}")]
    SyncFailure {
        upstream: String,
        operation: &'static str,
        #[source]
        source: gitflow_git::Error,
    },

    /// Changes were stashed and pulled over but could not be re-applied
    #[error(
        "Could not restore stashed changes ({source}); they are still on the stash, recover them with `git stash pop`"
    )]
    StashRestoreFailure {
        #[source]
        source: gitflow_git::Error,
    },

    #[error("Could not checkout branch '{branch}': {source}")]
    CheckoutFailure {
        branch: String,
        #[source]
        source: gitflow_git::Error,
    },

    #[error("Staging failed: {source}")]
    StagingFailure {
        #[source]
        source: gitflow_git::Error,
    },

    #[error("Commit failed: {source}")]
    CommitFailure {
        #[source]
        source: gitflow_git::Error,
    },

    #[error("Push of '{branch}' to {remote} failed: {source}")]
    PushFailure {
        branch: String,
        remote: String,
        #[source]
        source: gitflow_git::Error,
    },

    /// The operator's input could not be read
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// A configuration file could not be parsed
    #[error("Invalid configuration in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
