//! Read-only git2 queries used by [`LocalRepository`](crate::LocalRepository)
//!
//! Anything that only inspects repository state goes through git2. Anything
//! that mutates the index, the working tree or a remote shells out to `git`.

use git2::{BranchType, Repository, StatusOptions};

use crate::Result;

/// Whether the working tree or index differs from `HEAD`.
///
/// Ignored files are never counted. Untracked files are counted only when
/// `include_untracked` is set.
pub fn has_changes(repo: &Repository, include_untracked: bool) -> Result<bool> {
    let mut opts = StatusOptions::new();
    opts.include_untracked(include_untracked)
        .recurse_untracked_dirs(include_untracked)
        .include_ignored(false)
        .exclude_submodules(true);

    let statuses = repo.statuses(Some(&mut opts))?;
    Ok(!statuses.is_empty())
}

/// Check if a local branch exists.
pub fn branch_exists(repo: &Repository, name: &str) -> bool {
    repo.find_branch(name, BranchType::Local).is_ok()
}

/// Collect stash messages, newest first.
pub fn stash_messages(repo: &mut Repository) -> Result<Vec<String>> {
    let mut messages = Vec::new();
    repo.stash_foreach(|_, message, _| {
        messages.push(message.to_string());
        true
    })?;
    Ok(messages)
}
