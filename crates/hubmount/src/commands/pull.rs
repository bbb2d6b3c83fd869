//! Pull command: download every configured group and print mount hints

use hubmount_cache::HubCache;
use hubmount_fetch::{HubFetcher, fetch_groups};
use tracing::info;

use crate::config::{PullOptions, PullPlan};
use crate::errors::CliError;
use crate::report::{render_group, render_summary};

/// Fetch all configured model groups and print the report.
///
/// Processing always runs to completion; the error return only signals
/// that some groups ended up without a mountable file.
pub async fn execute(options: PullOptions) -> Result<(), CliError> {
    let plan = PullPlan::from_options(options)?;

    let cache = match plan.cache_dir.as_deref() {
        Some(dir) => HubCache::new(dir),
        None => HubCache::from_env()?,
    };
    let fetcher = HubFetcher::new(&cache)?;

    info!(
        cache_root = %cache.root().display(),
        groups = plan.groups.len(),
        "Starting pull"
    );

    let reports = fetch_groups(&fetcher, &cache, &plan.groups).await;

    for group in &reports {
        print!("{}", render_group(group, &plan.mount_root));
    }
    print!("{}", render_summary(&reports, &plan.mount_root));

    let missing = reports
        .iter()
        .filter(|group| group.representative().is_none())
        .count();
    if missing > 0 {
        return Err(CliError::incomplete(
            format!(
                "{missing} of {} model groups have no mountable file",
                reports.len()
            ),
            "Per-file failures are listed in the report above",
        ));
    }

    Ok(())
}
