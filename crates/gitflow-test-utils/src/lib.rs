//! Shared test utilities for the gitflow workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fake`]: [`FakeRepository`], an in-memory [`RepoHandle`] that records
//!   every call
//! - [`git`]: helpers for driving the real `git` executable
//! - [`repo`]: [`TestRepo`], a real work tree with a bare `origin`
//!
//! [`FakeRepository`]: fake::FakeRepository
//! [`RepoHandle`]: gitflow_git::RepoHandle
//! [`TestRepo`]: repo::TestRepo

pub mod fake;
pub mod git;
pub mod repo;
