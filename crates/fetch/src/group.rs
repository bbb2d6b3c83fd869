//! Model group orchestration: fetch ordered file lists and collect their
//! cache coordinates.

use crate::fetcher::{DEFAULT_REVISION, FetchRequest, Fetcher};
use hubmount_cache::{HubCache, ResolvedArtifact};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{error, warn};

/// One logical model to prepare: a repository plus the files wanted from it.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelGroup {
    /// Human-readable name used in logs and the report ("target", "draft").
    pub label: String,
    /// Repository identifier, e.g. `bartowski/Qwen_Qwen3-4B-GGUF`.
    #[serde(alias = "repo")]
    pub repo_id: String,
    /// Optional pinned revision; the hub default branch when absent.
    #[serde(default)]
    pub revision: Option<String>,
    /// Files to fetch, in order. The first file is the group's
    /// representative: its coordinates stand for the whole group.
    #[serde(alias = "files")]
    pub filenames: Vec<String>,
}

/// A file that was fetched, with its cache coordinates.
#[derive(Debug, Clone)]
pub struct FetchedFile {
    /// File name as requested.
    pub filename: String,
    /// Local absolute path returned by the fetcher.
    pub local_path: PathBuf,
    /// Cache coordinates; `None` when the path landed outside the cache
    /// root, in which case no mount hints exist for this file.
    pub resolved: Option<ResolvedArtifact>,
}

/// A file that could not be fetched.
#[derive(Debug, Clone)]
pub struct FailedFile {
    /// File name as requested.
    pub filename: String,
    /// Why the fetch failed.
    pub reason: String,
}

/// Outcome of processing one model group.
#[derive(Debug, Clone)]
pub struct GroupReport {
    /// Label of the group as configured.
    pub label: String,
    /// Repository the group points at.
    pub repo_id: String,
    /// Files fetched, in processed order.
    pub fetched: Vec<FetchedFile>,
    /// Files that failed to fetch, in processed order.
    pub failed: Vec<FailedFile>,
    /// Files never attempted because the group aborted.
    pub skipped: Vec<String>,
    /// True when the first file failed and the rest were skipped.
    pub aborted: bool,
}

impl GroupReport {
    fn new(group: &ModelGroup) -> Self {
        Self {
            label: group.label.clone(),
            repo_id: group.repo_id.clone(),
            fetched: Vec::new(),
            failed: Vec::new(),
            skipped: Vec::new(),
            aborted: false,
        }
    }

    /// The group's representative coordinates: the first file's resolution.
    ///
    /// Later files never become the representative, whatever happens to
    /// them. Absent when the first file failed to fetch or landed outside
    /// the cache root.
    #[must_use]
    pub fn representative(&self) -> Option<&ResolvedArtifact> {
        self.fetched.first().and_then(|file| file.resolved.as_ref())
    }
}

/// Fetch every file of `group` in listed order and resolve each against
/// `cache`.
///
/// Files are fetched one at a time; each fetch completes before the next
/// starts. The first file is make-or-break: if it cannot be fetched the
/// group aborts and the remaining files are never attempted. A later file's
/// failure is recorded and processing continues, leaving the representative
/// untouched. A fetched file that resolves to nothing is reported without
/// mount hints and is not an error.
pub async fn fetch_group(
    fetcher: &dyn Fetcher,
    cache: &HubCache,
    group: &ModelGroup,
) -> GroupReport {
    let mut report = GroupReport::new(group);
    let revision = group.revision.as_deref().unwrap_or(DEFAULT_REVISION);

    for (index, filename) in group.filenames.iter().enumerate() {
        let request = FetchRequest {
            repo_id: &group.repo_id,
            revision,
            filename,
        };
        match fetcher.fetch(&request).await {
            Ok(local_path) => {
                let resolved = cache.resolve(&local_path);
                if resolved.is_none() {
                    warn!(
                        label = %group.label,
                        %filename,
                        path = %local_path.display(),
                        root = %cache.root().display(),
                        "Fetched file lies outside the cache root; no mount hints available"
                    );
                }
                report.fetched.push(FetchedFile {
                    filename: filename.clone(),
                    local_path,
                    resolved,
                });
            }
            Err(e) if index == 0 => {
                error!(label = %group.label, %filename, "First file failed, aborting group: {e}");
                report.failed.push(FailedFile {
                    filename: filename.clone(),
                    reason: e.to_string(),
                });
                report.skipped.extend(group.filenames.iter().skip(1).cloned());
                report.aborted = true;
                break;
            }
            Err(e) => {
                warn!(label = %group.label, %filename, "Fetch failed, continuing with remaining files: {e}");
                report.failed.push(FailedFile {
                    filename: filename.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report
}

/// Process every group independently, in listed order.
///
/// A group abort never stops the groups after it; the returned reports
/// follow the input order.
pub async fn fetch_groups(
    fetcher: &dyn Fetcher,
    cache: &HubCache,
    groups: &[ModelGroup],
) -> Vec<GroupReport> {
    let mut reports = Vec::with_capacity(groups.len());
    for group in groups {
        reports.push(fetch_group(fetcher, cache, group).await);
    }
    reports
}
