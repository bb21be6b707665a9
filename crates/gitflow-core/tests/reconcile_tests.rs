//! Tests for upstream reconciliation against a recording fake repository

use gitflow_core::config::{FlowConfig, StashRestorePolicy};
use gitflow_core::{Error, MemoryReporter, Severity, SyncOutcome, reconcile};
use gitflow_test_utils::fake::{Call, FakeRepository, Op};
use pretty_assertions::assert_eq;

fn origin_main() -> FlowConfig {
    FlowConfig::default()
}

#[test]
fn test_clean_and_level_is_nothing_to_do() {
    let repo = FakeRepository::new();
    let reporter = MemoryReporter::new();

    let outcome = reconcile(&repo, &origin_main(), &reporter).unwrap();

    assert_eq!(outcome, SyncOutcome::NothingToDo);
    assert_eq!(
        repo.calls(),
        vec![
            Call::Fetch("origin".to_string()),
            Call::LogRange("HEAD..origin/main".to_string()),
            Call::IsDirty(true),
        ]
    );
}

#[test]
fn test_nothing_to_do_is_idempotent() {
    let repo = FakeRepository::new();
    let reporter = MemoryReporter::new();
    let config = origin_main();

    for _ in 0..5 {
        assert_eq!(
            reconcile(&repo, &config, &reporter).unwrap(),
            SyncOutcome::NothingToDo
        );
    }

    // Only fetches; no stash, pull or checkout ever happens
    assert!(
        repo.mutations()
            .iter()
            .all(|c| *c == Call::Fetch("origin".to_string()))
    );
    assert_eq!(repo.mutations().len(), 5);
    assert_eq!(repo.stash_count(), 0);
}

#[test]
fn test_dirty_and_level_proceeds_without_stash() {
    let repo = FakeRepository::new().with_dirty_tree();
    let reporter = MemoryReporter::new();

    let outcome = reconcile(&repo, &origin_main(), &reporter).unwrap();

    assert_eq!(outcome, SyncOutcome::Proceed);
    assert_eq!(repo.mutations(), vec![Call::Fetch("origin".to_string())]);
}

#[test]
fn test_clean_and_behind_proceeds_without_pull() {
    let repo = FakeRepository::new().with_incoming(&["upstream work"]);
    let reporter = MemoryReporter::new();

    let outcome = reconcile(&repo, &origin_main(), &reporter).unwrap();

    assert_eq!(outcome, SyncOutcome::Proceed);
    assert_eq!(repo.mutations(), vec![Call::Fetch("origin".to_string())]);
    assert!(reporter.contains(Severity::Notice, "1 new commit(s)"));
}

#[test]
fn test_dirty_and_behind_stashes_pulls_and_pops_in_order() {
    let repo = FakeRepository::new()
        .with_dirty_tree()
        .with_incoming(&["one", "two"]);
    let reporter = MemoryReporter::new();

    let outcome = reconcile(&repo, &origin_main(), &reporter).unwrap();

    assert_eq!(outcome, SyncOutcome::Proceed);
    assert_eq!(
        repo.mutations(),
        vec![
            Call::Fetch("origin".to_string()),
            Call::StashSave(true),
            Call::Pull("origin".to_string(), "main".to_string()),
            Call::StashPop,
        ]
    );
    assert_eq!(repo.stash_count(), 0);
    assert!(repo.dirty());
    assert!(reporter.contains(Severity::Success, "Restored stashed changes"));
}

#[test]
fn test_exactly_one_pop_per_stash() {
    let repo = FakeRepository::new()
        .with_dirty_tree()
        .with_incoming(&["one"]);
    let reporter = MemoryReporter::new();

    reconcile(&repo, &origin_main(), &reporter).unwrap();

    let pops = repo
        .calls()
        .iter()
        .filter(|c| **c == Call::StashPop)
        .count();
    let saves = repo
        .calls()
        .iter()
        .filter(|c| matches!(c, Call::StashSave(_)))
        .count();
    assert_eq!((saves, pops), (1, 1));
}

#[test]
fn test_fetch_failure_is_sync_failure() {
    let repo = FakeRepository::new().with_dirty_tree().failing(Op::Fetch);
    let reporter = MemoryReporter::new();

    let err = reconcile(&repo, &origin_main(), &reporter).unwrap_err();

    assert!(matches!(err, Error::SyncFailure { operation: "fetch", .. }));
    assert_eq!(repo.calls(), vec![Call::Fetch("origin".to_string())]);
}

#[test]
fn test_pull_failure_keeps_stash_and_skips_pop() {
    let repo = FakeRepository::new()
        .with_dirty_tree()
        .with_incoming(&["one"])
        .failing(Op::Pull);
    let reporter = MemoryReporter::new();

    let err = reconcile(&repo, &origin_main(), &reporter).unwrap_err();

    assert!(matches!(err, Error::SyncFailure { operation: "pull", .. }));
    assert!(!repo.calls().contains(&Call::StashPop));
    assert_eq!(repo.stash_count(), 1);
    assert!(reporter.contains(Severity::Warning, "git stash pop"));
}

#[test]
fn test_pop_failure_aborts_by_default() {
    let repo = FakeRepository::new()
        .with_dirty_tree()
        .with_incoming(&["one"])
        .failing(Op::StashPop);
    let reporter = MemoryReporter::new();

    let err = reconcile(&repo, &origin_main(), &reporter).unwrap_err();

    assert!(matches!(err, Error::StashRestoreFailure { .. }));
    assert!(err.to_string().contains("git stash pop"));
    assert_eq!(repo.stash_count(), 1);
}

#[test]
fn test_pop_failure_continues_when_configured() {
    let repo = FakeRepository::new()
        .with_dirty_tree()
        .with_incoming(&["one"])
        .failing(Op::StashPop);
    let reporter = MemoryReporter::new();
    let config = FlowConfig {
        stash_restore: StashRestorePolicy::Continue,
        ..FlowConfig::default()
    };

    let outcome = reconcile(&repo, &config, &reporter).unwrap();

    assert_eq!(outcome, SyncOutcome::Proceed);
    assert!(reporter.contains(Severity::Warning, "Could not restore stashed changes"));
}

#[test]
fn test_configured_remote_and_base_are_used() {
    let repo = FakeRepository::new()
        .with_dirty_tree()
        .with_incoming(&["one"]);
    let reporter = MemoryReporter::new();
    let config = FlowConfig {
        remote: "upstream".to_string(),
        base_branch: "develop".to_string(),
        ..FlowConfig::default()
    };

    reconcile(&repo, &config, &reporter).unwrap();

    let calls = repo.calls();
    assert_eq!(calls[0], Call::Fetch("upstream".to_string()));
    assert_eq!(calls[1], Call::LogRange("HEAD..upstream/develop".to_string()));
    assert!(calls.contains(&Call::Pull("upstream".to_string(), "develop".to_string())));
}
