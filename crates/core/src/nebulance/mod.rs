//! Nebulance, a ratioless private tracker for TV.
//!
//! Searches go through the tracker's JSON-RPC `api.php` endpoint
//! (`getTorrents`) authenticated with a per-user API key; no login or
//! cookies are involved.

mod filter;
mod parser;
mod query;
mod request;

pub use filter::filter_releases_by_query;
pub use parser::{NebulanceParser, EPISODE_MIN_SEED_TIME, SEASON_MIN_SEED_TIME};
pub use query::{NebulanceQuery, MIN_AGE_FILTER};
pub use request::{NebulanceRequestGenerator, DEFAULT_PAGE_SIZE, GET_TORRENTS_METHOD};

use tracing::{debug, warn};

use crate::config::{IndexerConfig, DEFAULT_BASE_URL};
use crate::criteria::SearchCriteria;
use crate::indexer::{
    IndexerCapabilities, IndexerCategory, IndexerError, IndexerInfo, IndexerPrivacy,
    IndexerRequest, IndexerResponse, ReleaseInfo, RequestChain, RequestGenerator, ResponseParser,
    TvSearchParam,
};
use crate::metrics::{
    RELEASES_PARSED, RELEASES_PER_RESPONSE, REQUEST_GROUPS_BUILT, RESPONSES_PARSED,
    RESPONSE_FAILURES,
};

pub const NEBULANCE_NAME: &str = "Nebulance";

/// The Nebulance indexer: request building, response parsing and cleanup.
pub struct Nebulance {
    generator: NebulanceRequestGenerator,
    parser: NebulanceParser,
}

impl Nebulance {
    pub fn new(config: &IndexerConfig) -> Self {
        Self {
            generator: NebulanceRequestGenerator::new(config),
            parser: NebulanceParser::new(config),
        }
    }

    pub fn name(&self) -> &'static str {
        NEBULANCE_NAME
    }

    /// Static description and capabilities.
    pub fn info() -> IndexerInfo {
        IndexerInfo {
            name: NEBULANCE_NAME.to_string(),
            urls: vec![DEFAULT_BASE_URL.to_string()],
            description: "Nebulance (NBL) is a ratioless Private Torrent Tracker for TV"
                .to_string(),
            language: "en-US".to_string(),
            privacy: IndexerPrivacy::Private,
            supports_pagination: true,
            supports_redirect: true,
            capabilities: Self::capabilities(),
        }
    }

    pub fn capabilities() -> IndexerCapabilities {
        let mut caps = IndexerCapabilities {
            tv_search_params: vec![
                TvSearchParam::Q,
                TvSearchParam::Season,
                TvSearchParam::Ep,
                TvSearchParam::ImdbId,
                TvSearchParam::TvMazeId,
            ],
            supports_raw_search: true,
            categories: Vec::new(),
        };

        caps.add_category_mapping("1", IndexerCategory::Tv);
        caps.add_category_mapping("2", IndexerCategory::TvSd);
        caps.add_category_mapping("3", IndexerCategory::TvHd);
        caps.add_category_mapping("4", IndexerCategory::TvUhd);

        caps
    }

    /// Request chain for the given criteria; empty for unsupported kinds.
    pub fn search_requests(&self, criteria: &SearchCriteria) -> RequestChain {
        let chain = self.generator.search_requests(criteria);

        REQUEST_GROUPS_BUILT
            .with_label_values(&[criteria.kind()])
            .inc_by(chain.len() as u64);
        debug!(kind = criteria.kind(), groups = chain.len(), "Search requests built");

        chain
    }

    /// Parse one response; any failure rejects the whole response.
    pub fn parse_response(
        &self,
        response: &IndexerResponse,
    ) -> Result<Vec<ReleaseInfo>, IndexerError> {
        match self.parser.parse_response(response) {
            Ok(releases) => {
                RESPONSES_PARSED.inc();
                RELEASES_PARSED.inc_by(releases.len() as u64);
                RELEASES_PER_RESPONSE
                    .with_label_values(&[])
                    .observe(releases.len() as f64);
                Ok(releases)
            }
            Err(e) => {
                RESPONSE_FAILURES.with_label_values(&[e.kind.label()]).inc();
                warn!(
                    indexer = %e.indexer,
                    status = e.response.status,
                    error = %e.kind,
                    "Tracker response rejected"
                );
                Err(e)
            }
        }
    }

    /// Post-filter merged results for the criteria they were searched with.
    pub fn cleanup_releases(
        &self,
        releases: Vec<ReleaseInfo>,
        criteria: &SearchCriteria,
    ) -> Vec<ReleaseInfo> {
        let before = releases.len();
        let releases = filter_releases_by_query(releases, criteria);

        if releases.len() != before {
            debug!(
                before = before,
                after = releases.len(),
                "Filtered releases not matching the episode"
            );
        }

        releases
    }

    /// Download request for a release link.
    ///
    /// A plain GET following redirects. Downloads authenticate through the
    /// link's own passkey, never a session cookie.
    pub fn download_request(&self, link: &str) -> IndexerRequest {
        IndexerRequest::get(link)
    }
}
