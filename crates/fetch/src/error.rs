//! Error types for the fetch crate

// Rust 1.92 compiler bug: false positives for thiserror/miette derive macro fields
// https://github.com/rust-lang/rust/issues/147648
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

/// Error type for fetch operations
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// A file could not be downloaded from the hub
    #[error("Fetching '{filename}' from '{repo_id}' failed: {message}")]
    #[diagnostic(
        code(hubmount::fetch::download),
        help("Check the repository id, file name, revision, and network connectivity")
    )]
    Download {
        /// Repository the file was requested from
        repo_id: String,
        /// File that failed to download
        filename: String,
        /// Underlying failure reported by the hub client
        message: String,
    },

    /// The hub client could not be constructed
    #[error("Hub client error: {message}")]
    #[diagnostic(code(hubmount::fetch::client))]
    Client {
        /// Underlying failure reported by the hub client
        message: String,
    },
}

impl Error {
    /// Create a download error with repository and file context
    #[must_use]
    pub fn download(
        repo_id: impl Into<String>,
        filename: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Download {
            repo_id: repo_id.into(),
            filename: filename.into(),
            message: message.into(),
        }
    }

    /// Create a client construction error
    #[must_use]
    pub fn client(msg: impl Into<String>) -> Self {
        Self::Client {
            message: msg.into(),
        }
    }
}

/// Result type for fetch operations
pub type Result<T> = std::result::Result<T, Error>;
