//! Synchronisation with the upstream branch
//!
//! Before anything is staged the local branch is compared with the upstream:
//!
//! | upstream has new commits | tree dirty | action                              | outcome       |
//! |--------------------------|------------|-------------------------------------|---------------|
//! | yes                      | yes        | stash, pull, pop                    | `Proceed`     |
//! | yes                      | no         | note the commits, no pull           | `Proceed`     |
//! | no                       | yes        | none                                | `Proceed`     |
//! | no                       | no         | none                                | `NothingToDo` |
//!
//! At most one stash is created per call and exactly one pop is attempted for
//! it. If the pull fails the stash is left in place for manual recovery.

use gitflow_git::RepoHandle;

use crate::config::{FlowConfig, StashRestorePolicy};
use crate::report::Reporter;
use crate::{Error, Result};

/// Non-failure results of [`reconcile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Safe to continue the workflow
    Proceed,
    /// No upstream changes and a clean tree: nothing to commit or reconcile
    NothingToDo,
}

/// Fetch the remote and bring the current branch up to date if needed.
///
/// Any repository failure is returned as [`Error::SyncFailure`]. A failed
/// stash pop is governed by [`FlowConfig::stash_restore`].
pub fn reconcile(
    repo: &dyn RepoHandle,
    config: &FlowConfig,
    reporter: &dyn Reporter,
) -> Result<SyncOutcome> {
    let upstream = config.upstream();
    let sync_failure = |operation: &'static str| {
        let upstream = upstream.clone();
        move |source| Error::SyncFailure {
            upstream,
            operation,
            source,
        }
    };

    reporter.info(&format!("Fetching {}...", config.remote));
    repo.fetch(&config.remote).map_err(sync_failure("fetch"))?;

    let incoming = repo
        .log_range(&config.divergence_range())
        .map_err(sync_failure("divergence check"))?;
    let dirty = repo.is_dirty(true).map_err(sync_failure("status"))?;

    tracing::debug!(
        upstream = %upstream,
        incoming = incoming.len(),
        dirty,
        "Compared local branch with upstream"
    );

    if incoming.is_empty() {
        if dirty {
            reporter.success(&format!("Up to date with {}", upstream));
            return Ok(SyncOutcome::Proceed);
        }
        return Ok(SyncOutcome::NothingToDo);
    }

    if !dirty {
        reporter.notice(&format!(
            "{} has {} new commit(s); working tree is clean, not pulling",
            upstream,
            incoming.len()
        ));
        return Ok(SyncOutcome::Proceed);
    }

    reporter.notice(&format!(
        "{} has {} new commit(s); stashing local changes before pulling",
        upstream,
        incoming.len()
    ));
    repo.stash_save(true).map_err(sync_failure("stash"))?;

    if let Err(source) = repo.pull(&config.remote, &config.base_branch) {
        reporter.warning("Local changes remain stashed; recover them with `git stash pop`");
        return Err(sync_failure("pull")(source));
    }
    reporter.success(&format!("Pulled {}", upstream));

    let stashes = repo.stash_list().map_err(sync_failure("stash list"))?;
    if stashes.is_empty() {
        tracing::warn!("Stash list empty after pull; nothing to restore");
        return Ok(SyncOutcome::Proceed);
    }

    match repo.stash_pop() {
        Ok(()) => reporter.success("Restored stashed changes"),
        Err(source) => match config.stash_restore {
            StashRestorePolicy::Abort => return Err(Error::StashRestoreFailure { source }),
            StashRestorePolicy::Continue => {
                tracing::warn!(error = %source, "Stash pop failed, continuing");
                reporter.warning(&format!(
                    "Could not restore stashed changes ({}); continuing. Recover them with `git stash pop`",
                    source
                ));
            }
        },
    }

    Ok(SyncOutcome::Proceed)
}
