//! CLI argument parsing using clap derive

use clap::Parser;

/// Gitflow - stage, commit and push your work on a branch in one guided pass
///
/// Fetches the remote, pulls upstream changes over a stash when the local
/// branch is behind, then asks for a branch name and commit message before
/// committing everything and pushing the branch.
///
/// Examples:
///   gitflow                                  # Fully interactive
///   gitflow -b feature/login                 # Preset branch, prompt for message
///   gitflow -b fix/typo -m "Fix typo"        # No prompts at all
///   gitflow --remote upstream --base develop # Override .gitflow.toml
#[derive(Parser, Debug)]
#[command(name = "gitflow")]
#[command(author, version, about)]
pub struct Cli {
    /// Branch to create (or switch to, if it exists)
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Commit message, used without confirmation
    #[arg(short, long)]
    pub message: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not clear the terminal before starting
    #[arg(long)]
    pub no_clear: bool,

    /// Remote to fetch from and push to
    #[arg(long)]
    pub remote: Option<String>,

    /// Upstream branch to compare against
    #[arg(long)]
    pub base: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from(["gitflow"]);
        assert!(cli.branch.is_none());
        assert!(cli.message.is_none());
        assert!(!cli.verbose);
        assert!(!cli.no_clear);
    }

    #[test]
    fn parse_presets() {
        let cli = Cli::parse_from(["gitflow", "-b", "feature/x", "-m", "fix bug"]);
        assert_eq!(cli.branch.as_deref(), Some("feature/x"));
        assert_eq!(cli.message.as_deref(), Some("fix bug"));
    }

    #[test]
    fn parse_overrides() {
        let cli = Cli::parse_from([
            "gitflow",
            "--remote",
            "upstream",
            "--base",
            "develop",
            "--no-clear",
            "-v",
        ]);
        assert_eq!(cli.remote.as_deref(), Some("upstream"));
        assert_eq!(cli.base.as_deref(), Some("develop"));
        assert!(cli.no_clear);
        assert!(cli.verbose);
    }
}
