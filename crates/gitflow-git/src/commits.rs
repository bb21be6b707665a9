//! Commit range extraction from git repositories.

use git2::Repository;

use crate::Result;

/// A single commit selected by a log range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRef {
    /// Short commit hash (7 characters)
    pub id: String,

    /// First line of the commit message
    pub summary: String,
}

impl CommitRef {
    pub fn new(id: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
        }
    }
}

/// List the commits reachable from the right side of `range` but not the left.
///
/// `range` uses git's two-dot syntax, e.g. `HEAD..origin/main`. Commits are
/// returned newest first.
pub fn list_range(repo: &Repository, range: &str) -> Result<Vec<CommitRef>> {
    let mut revwalk = repo.revwalk()?;
    revwalk.push_range(range)?;
    revwalk.set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::TIME)?;

    let mut commits = Vec::new();

    for oid_result in revwalk {
        let oid = oid_result?;
        let commit = repo.find_commit(oid)?;

        let summary = commit.summary().unwrap_or("").to_string();

        commits.push(CommitRef {
            id: format!("{:.7}", oid),
            summary,
        });
    }

    Ok(commits)
}
