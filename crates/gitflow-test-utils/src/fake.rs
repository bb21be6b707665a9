//! In-memory [`RepoHandle`] that records every call.
//!
//! Realism level: **FAKE**: no git, no filesystem. The fake keeps just enough
//! state (dirty flag, upstream commits, stash stack, branches) for the
//! workflow's decisions to play out, and lets a test make any operation fail.

use std::cell::RefCell;
use std::collections::HashSet;

use gitflow_git::{CommitRef, Error, RepoHandle, Result};

/// Capability names, used to inject failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Fetch,
    LogRange,
    IsDirty,
    StashSave,
    StashPop,
    StashList,
    Pull,
    CheckoutNew,
    Checkout,
    AddAll,
    Commit,
    Push,
}

/// One recorded capability call with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fetch(String),
    LogRange(String),
    IsDirty(bool),
    StashSave(bool),
    StashPop,
    StashList,
    Pull(String, String),
    CheckoutNew(String),
    Checkout(String),
    AddAll,
    Commit(String),
    Push(String, String),
}

impl Call {
    /// Whether the call changes repository or remote-tracking state.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Call::LogRange(_) | Call::IsDirty(_) | Call::StashList)
    }
}

#[derive(Debug)]
struct FakeState {
    incoming: Vec<CommitRef>,
    dirty: bool,
    staged: bool,
    stashes: Vec<String>,
    branches: Vec<String>,
    current: String,
    failing: HashSet<Op>,
}

/// A scripted repository for workflow tests.
///
/// # Example
///
/// ```rust
/// use gitflow_git::RepoHandle;
/// use gitflow_test_utils::fake::{Call, FakeRepository};
///
/// let repo = FakeRepository::new().with_dirty_tree();
/// assert!(repo.is_dirty(true).unwrap());
/// assert_eq!(repo.calls(), vec![Call::IsDirty(true)]);
/// ```
#[derive(Debug)]
pub struct FakeRepository {
    state: RefCell<FakeState>,
    calls: RefCell<Vec<Call>>,
}

impl Default for FakeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeRepository {
    /// A clean repository on `main`, level with its upstream.
    pub fn new() -> Self {
        Self {
            state: RefCell::new(FakeState {
                incoming: Vec::new(),
                dirty: false,
                staged: false,
                stashes: Vec::new(),
                branches: vec!["main".to_string()],
                current: "main".to_string(),
                failing: HashSet::new(),
            }),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Mark the working tree as having uncommitted changes.
    pub fn with_dirty_tree(self) -> Self {
        self.state.borrow_mut().dirty = true;
        self
    }

    /// Give the upstream branch commits the local branch lacks.
    pub fn with_incoming(self, summaries: &[&str]) -> Self {
        {
            let mut state = self.state.borrow_mut();
            for (i, summary) in summaries.iter().enumerate() {
                state
                    .incoming
                    .push(CommitRef::new(format!("{:07x}", i + 1), *summary));
            }
        }
        self
    }

    /// Add an existing local branch.
    pub fn with_branch(self, name: &str) -> Self {
        self.state.borrow_mut().branches.push(name.to_string());
        self
    }

    /// Make every call to `op` fail.
    pub fn failing(self, op: Op) -> Self {
        self.state.borrow_mut().failing.insert(op);
        self
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Calls that change state, in order.
    pub fn mutations(&self) -> Vec<Call> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.is_mutation())
            .cloned()
            .collect()
    }

    /// Branch currently checked out.
    pub fn current_branch(&self) -> String {
        self.state.borrow().current.clone()
    }

    /// Number of stash entries.
    pub fn stash_count(&self) -> usize {
        self.state.borrow().stashes.len()
    }

    /// Whether the working tree is dirty.
    pub fn dirty(&self) -> bool {
        self.state.borrow().dirty
    }

    fn record(&self, op: Op, call: Call) -> Result<()> {
        let command = format!("{:?}", call);
        self.calls.borrow_mut().push(call);
        if self.state.borrow().failing.contains(&op) {
            return Err(Error::CommandFailed {
                command,
                output: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

impl RepoHandle for FakeRepository {
    fn fetch(&self, remote: &str) -> Result<()> {
        self.record(Op::Fetch, Call::Fetch(remote.to_string()))
    }

    fn log_range(&self, range: &str) -> Result<Vec<CommitRef>> {
        self.record(Op::LogRange, Call::LogRange(range.to_string()))?;
        Ok(self.state.borrow().incoming.clone())
    }

    fn is_dirty(&self, include_untracked: bool) -> Result<bool> {
        self.record(Op::IsDirty, Call::IsDirty(include_untracked))?;
        Ok(self.state.borrow().dirty)
    }

    fn stash_save(&self, include_untracked: bool) -> Result<()> {
        self.record(Op::StashSave, Call::StashSave(include_untracked))?;
        let mut state = self.state.borrow_mut();
        if state.dirty {
            state.stashes.push("gitflow: auto-stash before pull".to_string());
            state.dirty = false;
        }
        Ok(())
    }

    fn stash_pop(&self) -> Result<()> {
        self.record(Op::StashPop, Call::StashPop)?;
        let mut state = self.state.borrow_mut();
        if state.stashes.pop().is_none() {
            return Err(Error::CommandFailed {
                command: "stash pop".to_string(),
                output: "No stash entries found.".to_string(),
            });
        }
        state.dirty = true;
        Ok(())
    }

    fn stash_list(&self) -> Result<Vec<String>> {
        self.record(Op::StashList, Call::StashList)?;
        Ok(self.state.borrow().stashes.iter().rev().cloned().collect())
    }

    fn pull(&self, remote: &str, branch: &str) -> Result<()> {
        self.record(Op::Pull, Call::Pull(remote.to_string(), branch.to_string()))?;
        self.state.borrow_mut().incoming.clear();
        Ok(())
    }

    fn checkout_new(&self, name: &str) -> Result<()> {
        self.record(Op::CheckoutNew, Call::CheckoutNew(name.to_string()))?;
        let mut state = self.state.borrow_mut();
        if state.branches.iter().any(|b| b == name) {
            return Err(Error::BranchExists {
                name: name.to_string(),
            });
        }
        state.branches.push(name.to_string());
        state.current = name.to_string();
        Ok(())
    }

    fn checkout(&self, name: &str) -> Result<()> {
        self.record(Op::Checkout, Call::Checkout(name.to_string()))?;
        let mut state = self.state.borrow_mut();
        if !state.branches.iter().any(|b| b == name) {
            return Err(Error::CommandFailed {
                command: format!("checkout {}", name),
                output: format!("pathspec '{}' did not match", name),
            });
        }
        state.current = name.to_string();
        Ok(())
    }

    fn add_all(&self) -> Result<()> {
        self.record(Op::AddAll, Call::AddAll)?;
        let mut state = self.state.borrow_mut();
        state.staged = state.dirty;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.record(Op::Commit, Call::Commit(message.to_string()))?;
        let mut state = self.state.borrow_mut();
        if !state.staged {
            return Err(Error::CommandFailed {
                command: "commit".to_string(),
                output: "nothing to commit, working tree clean".to_string(),
            });
        }
        state.staged = false;
        state.dirty = false;
        Ok(())
    }

    fn push(&self, remote: &str, branch: &str) -> Result<()> {
        self.record(Op::Push, Call::Push(remote.to_string(), branch.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_new_on_existing_branch_reports_exists() {
        let repo = FakeRepository::new().with_branch("feature/x");

        let err = repo.checkout_new("feature/x").unwrap_err();
        assert!(err.is_branch_exists());
    }

    #[test]
    fn test_injected_failure_is_still_recorded() {
        let repo = FakeRepository::new().failing(Op::Fetch);

        assert!(repo.fetch("origin").is_err());
        assert_eq!(repo.calls(), vec![Call::Fetch("origin".to_string())]);
    }

    #[test]
    fn test_stash_round_trip_restores_dirty_flag() {
        let repo = FakeRepository::new().with_dirty_tree();

        repo.stash_save(true).unwrap();
        assert!(!repo.dirty());
        assert_eq!(repo.stash_count(), 1);

        repo.stash_pop().unwrap();
        assert!(repo.dirty());
        assert_eq!(repo.stash_count(), 0);
    }

    #[test]
    fn test_queries_are_not_mutations() {
        let repo = FakeRepository::new();
        repo.log_range("HEAD..origin/main").unwrap();
        repo.is_dirty(true).unwrap();
        repo.stash_list().unwrap();

        assert!(repo.mutations().is_empty());
        assert_eq!(repo.calls().len(), 3);
    }
}
