//! The guided "save my work" sequence
//!
//! `Reconcile → SelectBranch → Stage → Commit → Push → Done`, stopping at the
//! first failure. Nothing is rolled back: a branch already created or a commit
//! already made stays as it is.

use std::fmt;
use std::path::Path;

use gitflow_git::{LocalRepository, RepoHandle};

use crate::config::FlowConfig;
use crate::prompt::{self, LineSource};
use crate::reconcile::{SyncOutcome, reconcile};
use crate::report::Reporter;
use crate::{Error, Result};

/// States of the workflow, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Reconcile,
    SelectBranch,
    Stage,
    Commit,
    Push,
    Done,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Reconcile => "reconcile",
            Step::SelectBranch => "select-branch",
            Step::Stage => "stage",
            Step::Commit => "commit",
            Step::Push => "push",
            Step::Done => "done",
        };
        f.write_str(name)
    }
}

/// Values supplied up front instead of being prompted for.
#[derive(Debug, Clone, Default)]
pub struct WorkflowOptions {
    /// Branch to create or switch to; still validated
    pub branch: Option<String>,

    /// Commit message; accepted without confirmation
    pub message: Option<String>,
}

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Changes were committed on `branch` and pushed
    Pushed { branch: String },
    /// Nothing upstream and nothing local: the run stopped early
    NothingToDo,
}

/// Find the repository containing `start`.
pub fn open_repository(start: &Path) -> Result<LocalRepository> {
    LocalRepository::discover(start).map_err(|err| {
        tracing::debug!(error = %err, "Repository discovery failed");
        Error::NotARepository {
            path: start.to_path_buf(),
        }
    })
}

/// Drives one run of the workflow against a repository.
pub struct Workflow<'a> {
    repo: &'a dyn RepoHandle,
    config: &'a FlowConfig,
    input: &'a mut dyn LineSource,
    reporter: &'a dyn Reporter,
}

impl<'a> Workflow<'a> {
    pub fn new(
        repo: &'a dyn RepoHandle,
        config: &'a FlowConfig,
        input: &'a mut dyn LineSource,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            repo,
            config,
            input,
            reporter,
        }
    }

    /// Run every step in order.
    ///
    /// A preset branch name is validated before the repository is touched, so
    /// an invalid one fails without fetching or mutating anything.
    pub fn run(&mut self, options: &WorkflowOptions) -> Result<Completion> {
        self.reporter
            .info(&format!("{0} Starting Gitflow {0}", "=".repeat(10)));

        let preset_branch = prompt::preset_branch(options.branch.as_deref())?;

        self.enter(Step::Reconcile);
        if reconcile(self.repo, self.config, self.reporter)? == SyncOutcome::NothingToDo {
            self.reporter
                .notice("Nothing to do: no upstream changes and the working tree is clean.");
            return Ok(Completion::NothingToDo);
        }

        self.enter(Step::SelectBranch);
        let branch = self.select_branch(preset_branch.as_deref())?;

        self.enter(Step::Stage);
        self.stage()?;

        self.enter(Step::Commit);
        self.commit(options.message.as_deref())?;

        self.enter(Step::Push);
        self.push(&branch)?;

        self.enter(Step::Done);
        self.reporter
            .success(&format!("Work saved on '{}'", branch));
        self.reporter
            .info(&format!("{0} Gitflow Complete {0}", "=".repeat(10)));
        Ok(Completion::Pushed { branch })
    }

    fn enter(&self, step: Step) {
        tracing::debug!(%step, "Entering step");
    }

    /// Create the branch, or switch to it if it already exists.
    fn select_branch(&mut self, preset: Option<&str>) -> Result<String> {
        let branch = prompt::branch_name(preset, &mut *self.input, self.reporter)?;
        let checkout_failure = |source| Error::CheckoutFailure {
            branch: branch.clone(),
            source,
        };

        match self.repo.checkout_new(&branch) {
            Ok(()) => {
                self.reporter
                    .success(&format!("Switched to new branch: {}", branch));
            }
            Err(err) if err.is_branch_exists() => {
                tracing::debug!(branch = %branch, "Branch exists, checking it out instead");
                self.repo.checkout(&branch).map_err(checkout_failure)?;
                self.reporter
                    .success(&format!("Checked out existing branch: {}", branch));
            }
            Err(source) => return Err(checkout_failure(source)),
        }

        Ok(branch)
    }

    fn stage(&self) -> Result<()> {
        self.repo
            .add_all()
            .map_err(|source| Error::StagingFailure { source })?;
        self.reporter.success("Staged all changes");
        Ok(())
    }

    fn commit(&mut self, preset: Option<&str>) -> Result<()> {
        let message = prompt::commit_message(preset, &mut *self.input, self.reporter)?;
        self.repo
            .commit(&message)
            .map_err(|source| Error::CommitFailure { source })?;
        self.reporter.success(&format!("Committed: '{}'", message));
        Ok(())
    }

    fn push(&self, branch: &str) -> Result<()> {
        let remote = &self.config.remote;
        self.repo
            .push(remote, branch)
            .map_err(|source| Error::PushFailure {
                branch: branch.to_string(),
                remote: remote.clone(),
                source,
            })?;
        self.reporter
            .success(&format!("Pushed '{}' to {}", branch, remote));
        Ok(())
    }
}
