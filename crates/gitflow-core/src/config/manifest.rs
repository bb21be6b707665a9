//! Manifest parsing for `.gitflow.toml` files
//!
//! A manifest is one parsed file. Every key is optional so that a local
//! override only needs to name what it changes.

use serde::{Deserialize, Serialize};

/// What to do when stashed changes cannot be re-applied after a pull.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StashRestorePolicy {
    /// Stop the run and leave the stash for manual recovery
    #[default]
    Abort,
    /// Warn and keep going
    Continue,
}

/// `[remote]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoteSection {
    /// Remote fetched from, pulled from and pushed to
    pub name: Option<String>,

    /// Upstream branch compared against for divergence
    pub base_branch: Option<String>,
}

/// `[workflow]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkflowSection {
    pub stash_restore: Option<StashRestorePolicy>,

    /// Clear the terminal before the run starts
    pub clear_screen: Option<bool>,
}

/// Configuration parsed from a single file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub remote: RemoteSection,

    #[serde(default)]
    pub workflow: WorkflowSection,
}

impl Manifest {
    /// Parse a manifest from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use gitflow_core::config::{Manifest, StashRestorePolicy};
    ///
    /// let manifest = Manifest::parse(r#"
    /// [remote]
    /// base_branch = "develop"
    ///
    /// [workflow]
    /// stash_restore = "continue"
    /// "#).unwrap();
    ///
    /// assert_eq!(manifest.remote.base_branch.as_deref(), Some("develop"));
    /// assert_eq!(manifest.workflow.stash_restore, Some(StashRestorePolicy::Continue));
    /// ```
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Merge another manifest into this one
    ///
    /// Keys set in `other` win; keys it leaves unset keep their current value.
    pub fn merge(&mut self, other: &Manifest) {
        if other.remote.name.is_some() {
            self.remote.name = other.remote.name.clone();
        }
        if other.remote.base_branch.is_some() {
            self.remote.base_branch = other.remote.base_branch.clone();
        }
        if other.workflow.stash_restore.is_some() {
            self.workflow.stash_restore = other.workflow.stash_restore;
        }
        if other.workflow.clear_screen.is_some() {
            self.workflow.clear_screen = other.workflow.clear_screen;
        }
    }
}
