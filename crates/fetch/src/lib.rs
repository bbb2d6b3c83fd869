//! Model file fetching and group orchestration
//!
//! This crate moves model files from the Hugging Face hub into the local hub
//! cache and pairs each fetched file with its cache coordinates:
//! - A [`Fetcher`] trait so orchestration never depends on the network
//! - [`HubFetcher`], the hub-backed implementation
//! - Group processing with a deliberate failure contract: a group lives or
//!   dies with its first file, later files fail soft
//!
//! # Overview
//!
//! Callers describe what they want as [`ModelGroup`]s (label, repository,
//! ordered file list) and receive one [`GroupReport`] per group. Fetching is
//! strictly sequential; re-running over a populated cache is a no-op that
//! reports the same coordinates.

mod error;
mod fetcher;
mod group;

// Re-export error types at crate root
pub use error::{Error, Result};

// Re-export main types
pub use fetcher::{DEFAULT_REVISION, FetchRequest, Fetcher, HubFetcher};
pub use group::{FailedFile, FetchedFile, GroupReport, ModelGroup, fetch_group, fetch_groups};
