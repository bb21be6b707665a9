//! Gitflow CLI
//!
//! Saves the work in the current repository to a branch on the remote.

mod cli;
mod error;
mod terminal;

use std::io::IsTerminal;
use std::path::Path;

use clap::Parser;
use gitflow_core::{
    Completion, ConfigResolver, FlowConfig, LineSource, Reporter, Workflow, WorkflowOptions,
    open_repository,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::Cli;
use error::Result;
use terminal::{ConsoleReporter, PipedInput, TerminalInput};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let reporter = ConsoleReporter;
    if let Err(e) = run(cli, &reporter) {
        reporter.error(&e.to_string());
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => return,
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
    tracing::debug!(verbose, "Tracing enabled");
}

fn run(cli: Cli, reporter: &ConsoleReporter) -> Result<Completion> {
    let cwd = std::env::current_dir()?;
    let repo = open_repository(&cwd)?;
    let config = load_config(repo.root(), repo.git_dir(), &cli)?;
    tracing::debug!(?config, "Resolved configuration");

    if config.clear_screen && !cli.no_clear && console::user_attended() {
        console::Term::stdout().clear_screen()?;
    }

    let options = WorkflowOptions {
        branch: cli.branch,
        message: cli.message,
    };
    let mut input: Box<dyn LineSource> = if std::io::stdin().is_terminal() {
        Box::new(TerminalInput)
    } else {
        tracing::debug!("stdin is not a terminal, reading answers line by line");
        Box::new(PipedInput::new(std::io::stdin().lock(), std::io::stdout()))
    };
    let completion = Workflow::new(&repo, &config, &mut *input, reporter).run(&options)?;
    Ok(completion)
}

/// Resolve config files, then apply command-line overrides.
fn load_config(root: &Path, git_dir: &Path, cli: &Cli) -> Result<FlowConfig> {
    let mut config = ConfigResolver::new(root, git_dir).resolve()?;
    if let Some(remote) = &cli.remote {
        config.remote = remote.clone();
    }
    if let Some(base) = &cli.base {
        config.base_branch = base.clone();
    }
    Ok(config)
}
