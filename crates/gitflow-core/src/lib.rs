//! Workflow state machine for gitflow
//!
//! This crate sequences the "save my work" ritual on top of a
//! [`RepoHandle`](gitflow_git::RepoHandle):
//!
//! - **Validation**: pure predicates for branch names and commit messages
//! - **Prompting**: branch and message acquisition with re-prompt loops
//! - **Reconciliation**: fetch, divergence check, stash/pull/restore
//! - **Workflow**: `Reconcile → SelectBranch → Stage → Commit → Push → Done`
//!
//! # Architecture
//!
//! ```text
//!                 gitflow-cli
//!                      |
//!                 gitflow-core
//!        +-------+-----+------+---------+
//!        |       |            |         |
//!    workflow reconcile    prompt    report
//!        |       |            |
//!        +-------+-----+------+
//!                      |
//!                 gitflow-git
//! ```
//!
//! Data flows one way: the workflow drives the reconciler and the prompter,
//! which drive the repository. Status lines go to a [`Reporter`]; operator
//! answers come from a [`LineSource`].

pub mod config;
pub mod error;
pub mod prompt;
pub mod reconcile;
pub mod report;
pub mod validate;
pub mod workflow;

pub use config::{ConfigResolver, FlowConfig, Manifest, StashRestorePolicy};
pub use error::{Error, Result};
pub use prompt::{LineSource, PromptError, ScriptedLines};
pub use reconcile::{SyncOutcome, reconcile};
pub use report::{MemoryReporter, Reporter, Severity};
pub use validate::{BranchNameProblem, validate_branch_name, validate_commit_message};
pub use workflow::{Completion, Step, Workflow, WorkflowOptions, open_repository};
