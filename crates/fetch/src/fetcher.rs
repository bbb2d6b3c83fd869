//! Fetcher trait for model file sources and the Hugging Face hub
//! implementation.

use crate::{Error, Result};
use async_trait::async_trait;
use hf_hub::api::tokio::{Api, ApiBuilder};
use hf_hub::{Repo, RepoType};
use hubmount_cache::HubCache;
use std::path::PathBuf;
use tracing::{debug, info};

/// Revision fetched when a group does not pin one.
pub const DEFAULT_REVISION: &str = "main";

/// Request parameters for fetching one file from a model repository.
#[derive(Debug, Clone, Copy)]
pub struct FetchRequest<'a> {
    /// Repository identifier, e.g. `bartowski/Qwen_Qwen3-4B-GGUF`.
    pub repo_id: &'a str,
    /// Revision to fetch from (branch, tag, or commit hash).
    pub revision: &'a str,
    /// File name within the repository.
    pub filename: &'a str,
}

/// Trait for model file sources.
///
/// Implementations return the local absolute path of the requested file.
/// A hit in the local cache and a fresh download are indistinguishable to
/// the caller; both are success, and repeating a request for an
/// already-cached file must return the same path without re-downloading.
///
/// # Example
///
/// ```ignore
/// #[async_trait]
/// impl Fetcher for HubFetcher {
///     fn name(&self) -> &'static str { "huggingface" }
///     // ...
/// }
/// ```
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Source name for logs and reports (e.g., "huggingface").
    fn name(&self) -> &'static str;

    /// Fetch one file and return its local absolute path.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be produced locally (unknown
    /// repository or file, network failure, denied access).
    async fn fetch(&self, request: &FetchRequest<'_>) -> Result<PathBuf>;
}

/// Fetcher backed by the Hugging Face hub.
///
/// Downloads land in the hub cache layout under the configured cache root,
/// so fetched paths resolve against the same [`HubCache`]. Authentication is
/// left to the hub client, which picks up a previously stored CLI token on
/// its own; nothing here touches credentials.
pub struct HubFetcher {
    api: Api,
}

impl HubFetcher {
    /// Build a hub client that downloads into `cache`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Client`] when the underlying HTTP client cannot be
    /// constructed.
    pub fn new(cache: &HubCache) -> Result<Self> {
        let api = ApiBuilder::new()
            .with_cache_dir(cache.root().to_path_buf())
            .with_progress(true)
            .build()
            .map_err(|e| Error::client(e.to_string()))?;
        Ok(Self { api })
    }
}

#[async_trait]
impl Fetcher for HubFetcher {
    fn name(&self) -> &'static str {
        "huggingface"
    }

    async fn fetch(&self, request: &FetchRequest<'_>) -> Result<PathBuf> {
        info!(
            repo_id = %request.repo_id,
            filename = %request.filename,
            revision = %request.revision,
            "Fetching from the hub"
        );
        let repo = Repo::with_revision(
            request.repo_id.to_string(),
            RepoType::Model,
            request.revision.to_string(),
        );
        let path = self
            .api
            .repo(repo)
            .get(request.filename)
            .await
            .map_err(|e| Error::download(request.repo_id, request.filename, e.to_string()))?;
        debug!(path = %path.display(), "Fetch complete");
        Ok(path)
    }
}
