//! Configuration loading
//!
//! Settings come from TOML files, merged in order (later sources override
//! earlier):
//!
//! 1. **Built-in defaults** - remote `origin`, base branch `main`
//! 2. **Repository config** - `.gitflow.toml`
//! 3. **Local overrides** - `gitflow.toml` in the git directory (`.git/`),
//!    so personal settings are never committed
//!
//! Command-line flags are applied on top by the CLI.
//!
//! # Example
//!
//! ```ignore
//! use gitflow_core::config::ConfigResolver;
//!
//! let config = ConfigResolver::new("/path/to/repo", "/path/to/repo/.git").resolve()?;
//! assert_eq!(config.divergence_range(), "HEAD..origin/main");
//! ```

mod manifest;
mod resolver;

pub use manifest::{Manifest, RemoteSection, StashRestorePolicy, WorkflowSection};
pub use resolver::{CONFIG_FILE, ConfigResolver, FlowConfig, LOCAL_CONFIG_FILE};
