//! Working-tree repository backed by git2 and the `git` executable

use std::path::{Path, PathBuf};
use std::process::Command;

use git2::Repository;

use crate::{CommitRef, Error, Result, commits, handle::RepoHandle, helpers};

/// Message attached to stashes created by the workflow.
const STASH_MESSAGE: &str = "gitflow: auto-stash before pull";

/// A non-bare repository discovered from a directory inside its work tree.
///
/// Queries (dirty state, log ranges, stash list, branch existence) use git2.
/// Mutations and network operations run `git` in the work tree root so hooks,
/// credential helpers and merge configuration apply exactly as they do on the
/// command line.
#[derive(Debug, Clone)]
pub struct LocalRepository {
    /// Work tree root (the directory containing `.git`)
    root: PathBuf,

    /// The repository's git directory, usually `<root>/.git`
    git_dir: PathBuf,
}

impl LocalRepository {
    /// Find the repository containing `start`, searching parent directories.
    pub fn discover(start: &Path) -> Result<Self> {
        let not_a_repo = || Error::NotARepository {
            path: start.to_path_buf(),
        };

        let repo = Repository::discover(start).map_err(|_| not_a_repo())?;
        let root = repo.workdir().ok_or_else(not_a_repo)?.to_path_buf();
        let git_dir = repo.path().to_path_buf();

        tracing::debug!(root = %root.display(), git_dir = %git_dir.display(), "Discovered repository");
        Ok(Self { root, git_dir })
    }

    /// Get the work tree root of the repository.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the git directory. Files here are never part of the work tree.
    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    fn open(&self) -> Result<Repository> {
        Ok(Repository::open(&self.root)?)
    }

    /// Run a git command in the work tree and return its trimmed stdout.
    fn git_command(&self, args: &[&str]) -> Result<String> {
        tracing::debug!(args = ?args, "Running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            let reason = failure_output(&output.stderr, &output.stdout);
            tracing::debug!(args = ?args, output = %reason, "git exited with failure");
            Err(Error::CommandFailed {
                command: args.join(" "),
                output: reason,
            })
        }
    }
}

/// Combine both streams of a failed command.
///
/// Git reports some failures (merge conflicts, "nothing to commit") on
/// stdout only.
fn failure_output(stderr: &[u8], stdout: &[u8]) -> String {
    [stderr, stdout]
        .iter()
        .map(|stream| String::from_utf8_lossy(stream).trim().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

impl RepoHandle for LocalRepository {
    fn fetch(&self, remote: &str) -> Result<()> {
        self.git_command(&["fetch", remote])?;
        Ok(())
    }

    fn log_range(&self, range: &str) -> Result<Vec<CommitRef>> {
        let repo = self.open()?;
        commits::list_range(&repo, range)
    }

    fn is_dirty(&self, include_untracked: bool) -> Result<bool> {
        let repo = self.open()?;
        helpers::has_changes(&repo, include_untracked)
    }

    fn stash_save(&self, include_untracked: bool) -> Result<()> {
        let mut args = vec!["stash", "push"];
        if include_untracked {
            args.push("--include-untracked");
        }
        args.extend(["-m", STASH_MESSAGE]);

        self.git_command(&args)?;
        Ok(())
    }

    fn stash_pop(&self) -> Result<()> {
        self.git_command(&["stash", "pop"])?;
        Ok(())
    }

    fn stash_list(&self) -> Result<Vec<String>> {
        let mut repo = self.open()?;
        helpers::stash_messages(&mut repo)
    }

    fn pull(&self, remote: &str, branch: &str) -> Result<()> {
        self.git_command(&["pull", "--no-rebase", "--no-edit", remote, branch])?;
        Ok(())
    }

    fn checkout_new(&self, name: &str) -> Result<()> {
        let repo = self.open()?;
        if helpers::branch_exists(&repo, name) {
            return Err(Error::BranchExists {
                name: name.to_string(),
            });
        }

        self.git_command(&["checkout", "-b", name])?;
        Ok(())
    }

    fn checkout(&self, name: &str) -> Result<()> {
        // Trailing "--" keeps the name from being read as a pathspec
        self.git_command(&["checkout", name, "--"])?;
        Ok(())
    }

    fn add_all(&self) -> Result<()> {
        self.git_command(&["add", "--all"])?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.git_command(&["commit", "-m", message])?;
        Ok(())
    }

    fn push(&self, remote: &str, branch: &str) -> Result<()> {
        self.git_command(&["push", remote, branch])?;
        Ok(())
    }
}
