//! [`TestRepo`] builder for end-to-end workflow scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::git::{bare_repo, configure_identity, git, repo_with_commit};

/// A work tree on `main` whose `origin` is a bare repository in the same
/// temporary directory.
///
/// # Example
///
/// ```rust,no_run
/// use gitflow_test_utils::repo::TestRepo;
///
/// let repo = TestRepo::new();
/// repo.write_file("notes.txt", "wip");
/// repo.push_upstream_commit("other.txt", "Upstream change");
/// assert_eq!(repo.current_branch(), "main");
/// ```
pub struct TestRepo {
    temp_dir: TempDir,
    work: PathBuf,
    origin: PathBuf,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// Create the work tree and its bare `origin`, with `main` pushed.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let work = temp_dir.path().join("work");
        let origin = temp_dir.path().join("origin.git");

        bare_repo(&origin);
        repo_with_commit(&work);
        git(&work, &["remote", "add", "origin", origin.to_str().unwrap()]);
        git(&work, &["push", "origin", "main"]);
        git(&work, &["fetch", "origin"]);

        Self {
            temp_dir,
            work,
            origin,
        }
    }

    /// Return the work tree root.
    pub fn root(&self) -> &Path {
        &self.work
    }

    /// Return the bare `origin` repository path.
    pub fn origin(&self) -> &Path {
        &self.origin
    }

    /// Write `content` to `path` (relative to the work tree root).
    pub fn write_file(&self, path: &str, content: &str) {
        let full_path = self.work.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// Commit a file on `origin/main` from a second clone, leaving the work
    /// tree behind the upstream.
    pub fn push_upstream_commit(&self, path: &str, summary: &str) {
        let other = self.temp_dir.path().join("other");
        if !other.exists() {
            git(
                self.temp_dir.path(),
                &["clone", self.origin.to_str().unwrap(), "other"],
            );
            configure_identity(&other);
            git(&other, &["checkout", "main"]);
        }
        git(&other, &["pull", "origin", "main"]);
        fs::write(other.join(path), summary).unwrap();
        git(&other, &["add", path]);
        git(&other, &["commit", "-m", summary]);
        git(&other, &["push", "origin", "main"]);
    }

    /// Name of the branch checked out in the work tree.
    pub fn current_branch(&self) -> String {
        git(&self.work, &["rev-parse", "--abbrev-ref", "HEAD"])
    }

    /// Commit id of `refs/heads/<branch>` in `origin`, if the branch exists there.
    pub fn remote_branch_head(&self, branch: &str) -> Option<String> {
        let output = std::process::Command::new("git")
            .args(["rev-parse", "--verify", &format!("refs/heads/{branch}")])
            .current_dir(&self.origin)
            .output()
            .unwrap();
        output
            .status
            .success()
            .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Subject line of the commit at the tip of the work tree.
    pub fn head_summary(&self) -> String {
        git(&self.work, &["log", "-1", "--format=%s"])
    }

    /// Number of stash entries in the work tree.
    pub fn stash_count(&self) -> usize {
        git(&self.work, &["stash", "list"]).lines().count()
    }

    /// Assert that `path` (relative to the work tree root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.work.join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let full_path = self.work.join(path);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }
}
