//! Repository capability trait consumed by the workflow

use crate::{CommitRef, Result};

/// The version-control operations the workflow is allowed to perform.
///
/// Every call blocks until the underlying tool returns. Implementations report
/// failures through [`crate::Error`]; in particular
/// [`checkout_new`](RepoHandle::checkout_new) must return
/// [`Error::BranchExists`](crate::Error::BranchExists) when the branch is
/// already present so callers can fall back to a plain checkout.
pub trait RepoHandle {
    /// Update remote-tracking refs for `remote`.
    fn fetch(&self, remote: &str) -> Result<()>;

    /// Commits selected by a revision range such as `HEAD..origin/main`.
    fn log_range(&self, range: &str) -> Result<Vec<CommitRef>>;

    /// Whether the working tree has uncommitted changes.
    ///
    /// Untracked files count only when `include_untracked` is set. Ignored
    /// files never count.
    fn is_dirty(&self, include_untracked: bool) -> Result<bool>;

    /// Save uncommitted changes onto the stash.
    fn stash_save(&self, include_untracked: bool) -> Result<()>;

    /// Re-apply and drop the most recent stash entry.
    fn stash_pop(&self) -> Result<()>;

    /// Messages of the current stash entries, newest first.
    fn stash_list(&self) -> Result<Vec<String>>;

    /// Merge `remote`/`branch` into the current branch.
    fn pull(&self, remote: &str, branch: &str) -> Result<()>;

    /// Create `name` from `HEAD` and switch to it.
    fn checkout_new(&self, name: &str) -> Result<()>;

    /// Switch to the existing branch `name`.
    fn checkout(&self, name: &str) -> Result<()>;

    /// Stage every tracked and untracked change.
    fn add_all(&self) -> Result<()>;

    /// Commit the staged changes.
    fn commit(&self, message: &str) -> Result<()>;

    /// Push `branch` to `remote`.
    fn push(&self, remote: &str, branch: &str) -> Result<()>;
}
