//! Command-line surface for the hubmount binary

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Parsed command line
#[derive(Parser, Debug)]
#[command(name = "hubmount")]
#[command(
    about = "Download Hugging Face model files into the local hub cache and print container mount paths"
)]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Chosen subcommand
    #[command(subcommand)]
    pub command: Commands,

    /// Log level for diagnostics on stderr
    #[arg(
        short = 'l',
        long,
        global = true,
        help = "Set logging level",
        default_value = "warn",
        value_enum
    )]
    pub level: crate::tracing::LogLevel,

    /// Structured log output
    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download model groups and report their cache coordinates
    #[command(about = "Download model files and print their mount paths")]
    Pull {
        /// TOML manifest listing the models to pull
        #[arg(long, short = 'c', value_name = "FILE", help = "TOML manifest of model groups")]
        config: Option<PathBuf>,
        /// Repository for an ad-hoc pull
        #[arg(
            long,
            value_name = "REPO_ID",
            help = "Repository to pull from, e.g. bartowski/Qwen_Qwen3-4B-GGUF"
        )]
        repo: Option<String>,
        /// Files for an ad-hoc pull; the first one names the mount
        #[arg(
            long = "file",
            value_name = "NAME",
            help = "File to download (repeatable, first file names the mount)"
        )]
        files: Vec<String>,
        /// Revision for an ad-hoc pull
        #[arg(long, value_name = "REV", help = "Git revision to download from")]
        revision: Option<String>,
        /// Display label for an ad-hoc pull
        #[arg(long, value_name = "TEXT", help = "Label for the ad-hoc model group")]
        label: Option<String>,
        /// Explicit cache directory
        #[arg(long, value_name = "DIR", help = "Hub cache directory override")]
        cache_dir: Option<PathBuf>,
        /// Container-side mount root
        #[arg(long, value_name = "DIR", help = "Container-side root for mount paths")]
        mount_root: Option<PathBuf>,
    },
    /// Map an already cached file to its coordinates, without fetching
    #[command(about = "Map a cached file path to its snapshot and mount coordinates")]
    Resolve {
        /// Path to inspect
        #[arg(value_name = "PATH", help = "Absolute path to a file inside the cache")]
        path: PathBuf,
        /// Explicit cache directory
        #[arg(long, value_name = "DIR", help = "Hub cache directory override")]
        cache_dir: Option<PathBuf>,
        /// Container-side mount root
        #[arg(long, value_name = "DIR", help = "Container-side root for mount paths")]
        mount_root: Option<PathBuf>,
    },
}

/// Parse the process arguments
pub fn parse() -> Cli {
    Cli::parse()
}
