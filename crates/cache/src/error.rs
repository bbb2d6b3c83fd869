//! Error types for the hub cache crate

// Rust 1.92 compiler bug: false positives for thiserror/miette derive macro fields
// https://github.com/rust-lang/rust/issues/147648
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

/// Error type for hub cache operations
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// Cache root could not be determined
    #[error("Hub cache configuration error: {message}")]
    #[diagnostic(
        code(hubmount::cache::config),
        help("Set HF_HUB_CACHE or HF_HOME, or pass an explicit cache directory")
    )]
    Configuration {
        /// Error message describing the configuration issue
        message: String,
    },
}

impl Error {
    /// Create a configuration error
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration {
            message: msg.into(),
        }
    }
}

/// Result type for hub cache operations
pub type Result<T> = std::result::Result<T, Error>;
