//! Runs a search end to end: build the request chain, issue every group,
//! parse, merge and clean up.

use std::collections::HashSet;
use std::time::Instant;

use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, info, warn};

use nebulance_core::{Nebulance, ReleaseInfo, RequestGroup, SearchCriteria};

use crate::transport::HttpTransport;

/// Merged result of one search.
#[derive(Debug, Serialize)]
pub struct SearchOutcome {
    pub releases: Vec<ReleaseInfo>,
    /// One message per failed request group.
    pub errors: Vec<String>,
    pub duration_ms: u64,
}

/// Issue one group and parse its responses.
async fn run_group(
    indexer: &Nebulance,
    transport: &dyn HttpTransport,
    group: &RequestGroup,
) -> Result<Vec<ReleaseInfo>, String> {
    let mut releases = Vec::new();

    for request in group.requests() {
        let response = transport
            .execute(request)
            .await
            .map_err(|e| format!("{}: {}", indexer.name(), e))?;

        let parsed = indexer.parse_response(&response).map_err(|e| e.to_string())?;
        releases.extend(parsed);
    }

    Ok(releases)
}

/// Search the tracker.
///
/// Groups are issued concurrently. A failed group is recorded in
/// `errors` and does not affect its siblings. Releases are merged in
/// group order and de-duplicated by guid, first occurrence winning.
pub async fn run_search(
    indexer: &Nebulance,
    transport: &dyn HttpTransport,
    criteria: &SearchCriteria,
) -> SearchOutcome {
    let start = Instant::now();
    let chain = indexer.search_requests(criteria);

    if chain.is_empty() {
        debug!(kind = criteria.kind(), "No requests for search kind");
    }

    let results = join_all(
        chain
            .groups()
            .iter()
            .map(|group| run_group(indexer, transport, group)),
    )
    .await;

    let mut seen = HashSet::new();
    let mut releases = Vec::new();
    let mut errors = Vec::new();

    for result in results {
        match result {
            Ok(group_releases) => {
                releases.extend(
                    group_releases
                        .into_iter()
                        .filter(|r| seen.insert(r.guid.clone())),
                );
            }
            Err(e) => {
                warn!(error = %e, "Request group failed");
                errors.push(e);
            }
        }
    }

    let releases = indexer.cleanup_releases(releases, criteria);
    let duration_ms = start.elapsed().as_millis() as u64;

    info!(
        kind = criteria.kind(),
        groups = chain.len(),
        releases = releases.len(),
        errors = errors.len(),
        duration_ms = duration_ms,
        "Search complete"
    );

    SearchOutcome {
        releases,
        errors,
        duration_ms,
    }
}
