//! Error surface for the hubmount binary

// Rust 1.92 compiler bug: false positives for thiserror/miette derive macro fields
// https://github.com/rust-lang/rust/issues/147648
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

/// Errors reported by the hubmount CLI
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// Invalid flag combination or unusable manifest
    #[error("configuration error: {message}")]
    #[diagnostic(code(hubmount::cli::config))]
    Config {
        /// What was wrong with the invocation
        message: String,
        /// Hint for fixing the invocation
        #[help]
        help: Option<String>,
    },

    /// Pull ran to completion, but some groups have nothing to mount
    #[error("{message}")]
    #[diagnostic(code(hubmount::cli::incomplete))]
    Incomplete {
        /// Which groups came up short
        message: String,
        /// Hint for recovering
        #[help]
        help: Option<String>,
    },

    /// Cache root discovery failed
    #[error(transparent)]
    #[diagnostic(transparent)]
    Cache(#[from] hubmount_cache::Error),

    /// Hub client construction or download failure
    #[error(transparent)]
    #[diagnostic(transparent)]
    Fetch(#[from] hubmount_fetch::Error),
}

impl CliError {
    /// Create a configuration error with help text
    #[must_use]
    pub fn config_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: Some(help.into()),
        }
    }

    /// Create an incomplete-pull error with help text
    #[must_use]
    pub fn incomplete(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Incomplete {
            message: message.into(),
            help: Some(help.into()),
        }
    }
}
