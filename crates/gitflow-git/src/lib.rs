//! Repository capability interface for gitflow
//!
//! The workflow never talks to git directly. It drives a [`RepoHandle`], a
//! small set of blocking operations (fetch, log range, dirty check, stash,
//! pull, checkout, add, commit, push) that either succeed or fail with an
//! [`Error`]. [`LocalRepository`] is the implementation backed by a real
//! working tree.

pub mod commits;
pub mod error;
pub mod handle;
pub mod helpers;
pub mod local;

pub use commits::CommitRef;
pub use error::{Error, Result};
pub use handle::RepoHandle;
pub use local::LocalRepository;
