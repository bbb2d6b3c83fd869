//! Hugging Face hub cache layout and path resolution
//!
//! This crate knows how the hub cache on disk is laid out and turns absolute
//! paths of cached files back into the coordinates a container launch script
//! needs:
//! - Cache root discovery (`HF_HUB_CACHE`, `HF_HOME`, platform cache dir)
//! - Repository folder encoding (`models--org--name`)
//! - Snapshot coordinates and in-container mount hints
//!
//! # Overview
//!
//! Files fetched from the hub land under
//! `<root>/models--{org}--{name}/snapshots/<revision>/<file>`, where the
//! file entry is typically a symlink into the cache's `blobs/` store.
//! Resolution here is purely lexical: paths are split, never canonicalized,
//! so the snapshot coordinates survive.
//!
//! # Example
//!
//! ```ignore
//! use hubmount_cache::HubCache;
//! use std::path::Path;
//!
//! let cache = HubCache::from_env()?;
//! if let Some(artifact) = cache.resolve(Path::new("/data/hub/models--org--repo/snapshots/abc/f.gguf")) {
//!     println!("{}", artifact.mount_path(Path::new("/hf_cache")).display());
//! }
//! ```

mod error;
mod hub;
mod resolve;

// Re-export error types at crate root
pub use error::{Error, Result};

// Re-export main types
pub use hub::{HubCache, SNAPSHOTS_DIR, repo_folder_name};
pub use resolve::{DEFAULT_MOUNT_ROOT, ResolvedArtifact};
