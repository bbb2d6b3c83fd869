//! Resolve command: map a cached path to its mount coordinates

use std::path::PathBuf;

use hubmount_cache::{DEFAULT_MOUNT_ROOT, HubCache};
use tracing::debug;

use crate::errors::CliError;
use crate::report::{render_artifact, render_unresolved};

/// Inputs for a resolve run
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Absolute path to inspect
    pub path: PathBuf,
    /// Cache directory override
    pub cache_dir: Option<PathBuf>,
    /// Container mount root override
    pub mount_root: Option<PathBuf>,
}

/// Resolve a path against the cache layout and print its coordinates.
///
/// A path outside the cache root is an expected outcome, not an error;
/// the command prints the notice and still exits successfully.
pub fn execute(options: ResolveOptions) -> Result<(), CliError> {
    let cache = match options.cache_dir.as_deref() {
        Some(dir) => HubCache::new(dir),
        None => HubCache::from_env()?,
    };
    let mount_root = options
        .mount_root
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MOUNT_ROOT));

    debug!(
        cache_root = %cache.root().display(),
        path = %options.path.display(),
        "Resolving path"
    );

    match cache.resolve(&options.path) {
        Some(artifact) => print!("{}", render_artifact(&artifact, &mount_root, true)),
        None => print!("{}", render_unresolved(&options.path, cache.root())),
    }

    Ok(())
}
