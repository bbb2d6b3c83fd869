//! Report rendering for pull and resolve output
//!
//! Pure string builders, so the exact output can be asserted in tests
//! without capturing stdout.

use std::fmt::Write as _;
use std::path::Path;

use hubmount_cache::ResolvedArtifact;
use hubmount_fetch::GroupReport;

/// Render the coordinate block for one resolved file.
///
/// The relative path is the launch-script shorthand and is only printed
/// for the file that names the group mount.
pub fn render_artifact(
    artifact: &ResolvedArtifact,
    mount_root: &Path,
    include_relative: bool,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  absolute path: {}", artifact.absolute_path.display());
    if include_relative {
        let _ = writeln!(out, "  relative path: {}", artifact.relative_path.display());
    }
    let _ = writeln!(out, "  snapshot:      {}", artifact.snapshot_id);
    let _ = writeln!(out, "  repo folder:   {}", artifact.repo_folder);
    let _ = writeln!(
        out,
        "  mount path:    {}",
        artifact.mount_path(mount_root).display()
    );
    out
}

/// Render the per-file report for one fetched group
pub fn render_group(group: &GroupReport, mount_root: &Path) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- {}: {} ---", group.label, group.repo_id);
    for (index, file) in group.fetched.iter().enumerate() {
        let _ = writeln!(out, "[{}] {}", group.label, file.filename);
        match &file.resolved {
            Some(artifact) => {
                out.push_str(&render_artifact(artifact, mount_root, index == 0));
            }
            None => {
                let _ = writeln!(out, "  absolute path: {}", file.local_path.display());
                let _ = writeln!(out, "  outside the cache root, no mount path available");
            }
        }
    }
    for failure in &group.failed {
        let _ = writeln!(
            out,
            "[{}] failed {}: {}",
            group.label, failure.filename, failure.reason
        );
    }
    for filename in &group.skipped {
        let _ = writeln!(out, "[{}] skipped {}", group.label, filename);
    }
    out
}

/// Render the closing summary, one mount hint per group
pub fn render_summary(reports: &[GroupReport], mount_root: &Path) -> String {
    let mut out = String::new();
    let ready = reports
        .iter()
        .filter(|group| group.representative().is_some())
        .count();
    let _ = writeln!(out, "Prepared {ready} of {} model groups.", reports.len());
    for group in reports {
        match group.representative() {
            Some(artifact) => {
                let _ = writeln!(
                    out,
                    "  {}: {}",
                    group.label,
                    artifact.mount_path(mount_root).display()
                );
            }
            None => {
                let _ = writeln!(
                    out,
                    "  {}: unavailable (no file resolved into the cache)",
                    group.label
                );
            }
        }
    }
    out
}

/// Render the notice for a path that does not live under the cache root
pub fn render_unresolved(path: &Path, cache_root: &Path) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", path.display());
    let _ = writeln!(
        out,
        "  outside the cache root {}, no mount path available",
        cache_root.display()
    );
    out
}
