//! Hub cache location and on-disk layout

use crate::{Error, Result};
use dirs::{cache_dir, home_dir};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the directory that holds snapshot revisions inside a repository
/// cache folder.
pub const SNAPSHOTS_DIR: &str = "snapshots";

/// Cache folder name for a model repository.
///
/// The hub encodes `org/name` identifiers as a single directory component:
/// `models--org--name`.
#[must_use]
pub fn repo_folder_name(repo_id: &str) -> String {
    format!("models--{}", repo_id.replace('/', "--"))
}

/// Handle on a local hub cache root.
///
/// Only path arithmetic lives here; downloading into the cache is the
/// fetcher's job and nothing in this type touches the filesystem.
#[derive(Debug, Clone)]
pub struct HubCache {
    root: PathBuf,
}

/// Inputs for determining the hub cache root directory
#[derive(Debug, Clone)]
struct RootInputs {
    hf_hub_cache: Option<PathBuf>,
    hf_home: Option<PathBuf>,
    os_cache_dir: Option<PathBuf>,
    home_dir: Option<PathBuf>,
}

fn root_from_inputs(inputs: RootInputs) -> Result<PathBuf> {
    // Resolution order (first present wins):
    // 1) HF_HUB_CACHE (explicit override, used verbatim)
    // 2) HF_HOME/hub
    // 3) OS cache dir/huggingface/hub
    // 4) ~/.cache/huggingface/hub
    if let Some(dir) = inputs.hf_hub_cache.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(dir);
    }
    if let Some(hf_home) = inputs.hf_home.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(hf_home.join("hub"));
    }
    if let Some(os_cache) = inputs.os_cache_dir {
        return Ok(os_cache.join("huggingface/hub"));
    }
    if let Some(home) = inputs.home_dir {
        return Ok(home.join(".cache/huggingface/hub"));
    }
    Err(Error::configuration(
        "Failed to determine the hub cache directory",
    ))
}

impl HubCache {
    /// Create a cache handle with an explicit root, bypassing discovery.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Discover the hub cache root from the environment.
    ///
    /// Resolution order:
    /// 1. `HF_HUB_CACHE` if set and non-empty, used verbatim
    /// 2. `HF_HOME` if set and non-empty, joined with `hub`
    /// 3. The platform cache directory joined with `huggingface/hub`
    /// 4. `~/.cache/huggingface/hub`
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when no candidate can be produced,
    /// which only happens when neither a cache nor a home directory is known
    /// to the platform.
    pub fn from_env() -> Result<Self> {
        let inputs = RootInputs {
            hf_hub_cache: std::env::var("HF_HUB_CACHE")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            hf_home: std::env::var("HF_HOME")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            os_cache_dir: cache_dir(),
            home_dir: home_dir(),
        };
        let root = root_from_inputs(inputs)?;
        debug!(root = %root.display(), "Resolved hub cache root");
        Ok(Self { root })
    }

    /// The cache root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Cache folder for a repository, e.g. `<root>/models--org--name`.
    #[must_use]
    pub fn repo_dir(&self, repo_id: &str) -> PathBuf {
        self.root.join(repo_folder_name(repo_id))
    }

    /// Snapshot directory for a pinned revision of a repository.
    #[must_use]
    pub fn snapshot_dir(&self, repo_id: &str, snapshot_id: &str) -> PathBuf {
        self.repo_dir(repo_id).join(SNAPSHOTS_DIR).join(snapshot_id)
    }
}
