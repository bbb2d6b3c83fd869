//! Tracing setup for the hubmount CLI
//!
//! Logs always go to stderr so the report on stdout stays clean enough
//! to paste into launch scripts.

use std::io;

pub use tracing::Level;
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log level options for the CLI
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum LogLevel {
    /// Show all logs (trace level)
    Trace,
    /// Show debug and above
    Debug,
    /// Show info and above
    Info,
    /// Show warnings and above (default)
    Warn,
    /// Show errors only
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

/// Filter directives covering every workspace crate at the given level.
///
/// Only used when RUST_LOG is not set; an explicit RUST_LOG always wins.
fn default_directives(level: Level) -> String {
    format!("hubmount={level},hubmount_cache={level},hubmount_fetch={level}")
}

/// Initialize the global subscriber for the CLI process
pub fn init(level: LogLevel, json: bool) -> miette::Result<()> {
    let level = Level::from(level);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(level)))
        .map_err(|e| miette::miette!("Failed to create tracing filter: {e}"))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stderr)
            .with_current_span(true)
            .with_span_list(true);

        registry.with(layer).init();
    } else {
        let layer = tracing_subscriber::fmt::layer()
            .compact()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_ids(false);

        registry.with(layer).init();
    }

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        json,
        "Tracing initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(Level::from(LogLevel::Trace), Level::TRACE);
        assert_eq!(Level::from(LogLevel::Debug), Level::DEBUG);
        assert_eq!(Level::from(LogLevel::Info), Level::INFO);
        assert_eq!(Level::from(LogLevel::Warn), Level::WARN);
        assert_eq!(Level::from(LogLevel::Error), Level::ERROR);
    }

    #[test]
    fn test_directives_cover_every_workspace_crate() {
        let directives = default_directives(Level::DEBUG);
        assert!(directives.contains("hubmount=DEBUG"));
        assert!(directives.contains("hubmount_cache=DEBUG"));
        assert!(directives.contains("hubmount_fetch=DEBUG"));
    }
}
