//! Configuration resolution with layered merge
//!
//! The `ConfigResolver` loads `.gitflow.toml` from the work tree root and
//! `gitflow.toml` from the git directory, and folds them into a [`FlowConfig`].

use std::fs;
use std::path::{Path, PathBuf};

use super::manifest::{Manifest, StashRestorePolicy};
use crate::{Error, Result};

/// Repository config file name, relative to the work tree root.
pub const CONFIG_FILE: &str = ".gitflow.toml";

/// Personal override file name, relative to the git directory.
///
/// Living outside the work tree, it is never staged or counted as a change.
pub const LOCAL_CONFIG_FILE: &str = "gitflow.toml";

/// The effective configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowConfig {
    /// Remote fetched from, pulled from and pushed to
    pub remote: String,

    /// Upstream branch compared against for divergence
    pub base_branch: String,

    pub stash_restore: StashRestorePolicy,

    pub clear_screen: bool,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            base_branch: "main".to_string(),
            stash_restore: StashRestorePolicy::default(),
            clear_screen: true,
        }
    }
}

impl From<Manifest> for FlowConfig {
    fn from(manifest: Manifest) -> Self {
        let defaults = FlowConfig::default();
        Self {
            remote: manifest.remote.name.unwrap_or(defaults.remote),
            base_branch: manifest.remote.base_branch.unwrap_or(defaults.base_branch),
            stash_restore: manifest
                .workflow
                .stash_restore
                .unwrap_or(defaults.stash_restore),
            clear_screen: manifest
                .workflow
                .clear_screen
                .unwrap_or(defaults.clear_screen),
        }
    }
}

impl FlowConfig {
    /// The remote-tracking branch, e.g. `origin/main`.
    pub fn upstream(&self) -> String {
        format!("{}/{}", self.remote, self.base_branch)
    }

    /// Log range selecting upstream commits missing locally, e.g. `HEAD..origin/main`.
    pub fn divergence_range(&self) -> String {
        format!("HEAD..{}", self.upstream())
    }
}

/// Resolves configuration by merging the repository and personal files
pub struct ConfigResolver {
    /// Work tree root directory
    root: PathBuf,

    /// Git directory holding the personal layer
    git_dir: PathBuf,
}

impl ConfigResolver {
    pub fn new(root: impl Into<PathBuf>, git_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            git_dir: git_dir.into(),
        }
    }

    /// Resolve the configuration by merging all sources
    ///
    /// Missing files are skipped. A file that exists but does not parse is an
    /// error rather than being silently ignored.
    pub fn resolve(&self) -> Result<FlowConfig> {
        let mut manifest = Manifest::default();

        let layers = [
            self.root.join(CONFIG_FILE),
            self.git_dir.join(LOCAL_CONFIG_FILE),
        ];
        for path in &layers {
            if let Some(layer) = load_manifest(path)? {
                tracing::debug!(file = %path.display(), "Loaded config layer");
                manifest.merge(&layer);
            }
        }

        Ok(FlowConfig::from(manifest))
    }
}

fn load_manifest(path: &Path) -> Result<Option<Manifest>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let manifest = Manifest::parse(&content).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(manifest))
}
