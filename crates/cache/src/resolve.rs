//! Lexical resolution of cached files into mount coordinates

use crate::hub::{HubCache, SNAPSHOTS_DIR};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Default in-container location where launch scripts mount the hub cache.
pub const DEFAULT_MOUNT_ROOT: &str = "/hf_cache";

/// Coordinates of a file located inside the hub cache.
///
/// Every field is derived from the absolute path and the cache root alone;
/// the filesystem is never consulted. Snapshot entries are symlinks into the
/// cache's `blobs/` store, so canonicalizing would discard the snapshot
/// coordinates this type exists to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    /// Absolute path exactly as produced by the fetch step
    pub absolute_path: PathBuf,
    /// Path relative to the cache root
    pub relative_path: PathBuf,
    /// Name of the directory holding the file: the snapshot revision hash
    pub snapshot_id: String,
    /// Name of the repository cache folder, e.g. `models--org--name`
    pub repo_folder: String,
}

impl ResolvedArtifact {
    /// Path the file will have inside a container that mounts the hub cache
    /// at `mount_root`.
    ///
    /// This is a suggestion for launch scripts; nothing is mounted here.
    #[must_use]
    pub fn mount_path(&self, mount_root: &Path) -> PathBuf {
        let file_name = self.absolute_path.file_name().unwrap_or(OsStr::new(""));
        mount_root
            .join(&self.repo_folder)
            .join(SNAPSHOTS_DIR)
            .join(&self.snapshot_id)
            .join(file_name)
    }
}

impl HubCache {
    /// Locate `absolute_path` inside this cache and derive its coordinates.
    ///
    /// Returns `None` when the path does not lie under the cache root. That
    /// is an expected outcome (file cached elsewhere, relocated root), not an
    /// error. The prefix check compares whole path segments, so `/cacheX`
    /// never counts as inside `/cache`.
    ///
    /// Resolution is purely lexical: no canonicalization, no symlink
    /// traversal, no existence check. Paths shallower than the hub layout
    /// still resolve, with ancestor names taken as found (possibly empty).
    #[must_use]
    pub fn resolve(&self, absolute_path: &Path) -> Option<ResolvedArtifact> {
        let Ok(relative_path) = absolute_path.strip_prefix(self.root()) else {
            trace!(
                path = %absolute_path.display(),
                root = %self.root().display(),
                "Path is outside the hub cache root"
            );
            return None;
        };

        let snapshot_id = dir_name(absolute_path.parent());
        // The repository folder sits above the `snapshots` segment, three
        // levels up from the file itself.
        let repo_folder = dir_name(
            absolute_path
                .parent()
                .and_then(Path::parent)
                .and_then(Path::parent),
        );

        trace!(
            path = %absolute_path.display(),
            %snapshot_id,
            %repo_folder,
            "Resolved hub cache entry"
        );

        Some(ResolvedArtifact {
            absolute_path: absolute_path.to_path_buf(),
            relative_path: relative_path.to_path_buf(),
            snapshot_id,
            repo_folder,
        })
    }
}

/// Final component of `dir` as a string; empty when the ancestor does not
/// exist or has no name.
fn dir_name(dir: Option<&Path>) -> String {
    dir.and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
