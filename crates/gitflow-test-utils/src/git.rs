//! Helpers for driving the real `git` executable in fixtures.

use std::fs;
use std::path::Path;
use std::process::Command;

/// Run `git` in `dir`, returning trimmed stdout.
///
/// # Panics
/// Panics if git cannot be spawned or exits unsuccessfully.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("git: failed to run `git {args:?}`: {e}"));
    if !output.status.success() {
        panic!(
            "git: `git {args:?}` failed in {}:\n{}",
            dir.display(),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Configure a throwaway identity and disable signing.
pub fn configure_identity(dir: &Path) {
    git(dir, &["config", "user.email", "test@test.com"]);
    git(dir, &["config", "user.name", "Test User"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
}

/// Initialises a bare repository at `path`.
///
/// # Panics
/// Panics if any git operation fails.
pub fn bare_repo(path: &Path) {
    fs::create_dir_all(path)
        .unwrap_or_else(|e| panic!("bare_repo: failed to create {}: {e}", path.display()));
    git(path, &["init", "--bare"]);
}

/// Initialises a real git repository with an initial commit on `main`.
///
/// Specifically:
/// - Runs `git init`
/// - Configures `user.email`, `user.name`, and `commit.gpgsign = false`
/// - Creates `README.md` and makes an initial commit
/// - Renames the current branch to `main`
///
/// # Panics
/// Panics if any git operation fails.
pub fn repo_with_commit(path: &Path) {
    fs::create_dir_all(path)
        .unwrap_or_else(|e| panic!("repo_with_commit: failed to create {}: {e}", path.display()));
    git(path, &["init"]);
    configure_identity(path);

    fs::write(path.join("README.md"), "# Test")
        .unwrap_or_else(|e| panic!("repo_with_commit: failed to write README.md: {e}"));

    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);
    git(path, &["branch", "-M", "main"]);
}
