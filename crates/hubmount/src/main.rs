//! hubmount CLI entry point
//!
//! Downloads model files from the Hugging Face Hub into the shared local
//! cache and prints the coordinates needed to mount them into containers.

// The printed report is this binary's product, so direct stdout/stderr
// output is intentional. expect is reserved for infallible string writes.
#![allow(clippy::print_stdout, clippy::print_stderr, clippy::expect_used)]

mod cli;
mod commands;
mod config;
mod errors;
mod report;
mod tracing;

use crate::cli::Commands;
use crate::commands::resolve::ResolveOptions;
use crate::config::PullOptions;

#[tokio::main]
async fn main() {
    // NOTE: the tracing infrastructure may be corrupted during a panic,
    // so the hook sticks to plain stderr output.
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {panic_info}");
        eprintln!("Internal error occurred. Run with RUST_LOG=debug for more information.");
    }));

    if let Err(error) = run_main().await {
        eprintln!("{error:?}");
        std::process::exit(1);
    }
}

async fn run_main() -> miette::Result<()> {
    // Clap reports usage errors itself; parse first so --level and
    // --log-json are known before tracing comes up.
    let parsed = cli::parse();
    crate::tracing::init(parsed.level, parsed.log_json)?;

    match parsed.command {
        Commands::Pull {
            config,
            repo,
            files,
            revision,
            label,
            cache_dir,
            mount_root,
        } => {
            let options = PullOptions {
                config,
                repo,
                files,
                revision,
                label,
                cache_dir,
                mount_root,
            };
            commands::pull::execute(options).await?;
        }
        Commands::Resolve {
            path,
            cache_dir,
            mount_root,
        } => {
            let options = ResolveOptions {
                path,
                cache_dir,
                mount_root,
            };
            commands::resolve::execute(options)?;
        }
    }

    Ok(())
}
