//! Error types for gitflow-git

use std::path::PathBuf;

/// Result type for gitflow-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in repository operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a git repository: {}", path.display())]
    NotARepository { path: PathBuf },

    /// `checkout_new` was asked for a branch that is already present.
    ///
    /// This is the "not applicable" outcome callers fall back on, not a
    /// genuine failure.
    #[error("Branch '{name}' already exists")]
    BranchExists { name: String },

    /// `output` is git's stderr and stdout, whichever were non-empty
    #[error("`git {command}` failed: {output}")]
    CommandFailed { command: String, output: String },
}

impl Error {
    /// Whether this error is the structured "branch already exists" reason.
    pub fn is_branch_exists(&self) -> bool {
        matches!(self, Error::BranchExists { .. })
    }
}
