//! Builds `getTorrents` JSON-RPC calls from search criteria.

use serde_json::json;
use tracing::debug;

use crate::config::IndexerConfig;
use crate::criteria::{wildcard_pattern, BasicSearchCriteria, TvSearchCriteria};
use crate::indexer::{JsonRpcRequestBuilder, RequestChain, RequestGenerator, RequestGroup};

use super::query::NebulanceQuery;

/// Remote method name fixed by the tracker API.
pub const GET_TORRENTS_METHOD: &str = "getTorrents";

/// Page size when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

pub struct NebulanceRequestGenerator {
    base_url: String,
    api_key: String,
}

impl NebulanceRequestGenerator {
    pub fn new(config: &IndexerConfig) -> Self {
        Self {
            base_url: config.base_url(),
            api_key: config.api_key.clone(),
        }
    }

    fn api_url(&self) -> String {
        format!("{}api.php", self.base_url)
    }

    /// One `getTorrents` call for the given query and page.
    fn paged_request(
        &self,
        query: &NebulanceQuery,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> RequestGroup {
        let params = json!([
            self.api_key,
            query,
            limit.unwrap_or(DEFAULT_PAGE_SIZE),
            offset.unwrap_or(0)
        ]);

        let request = JsonRpcRequestBuilder::new(self.api_url())
            .call(GET_TORRENTS_METHOD, params)
            .suppress_http_error(true)
            .build();

        RequestGroup::single(request)
    }

    /// Primary request, plus an id-only request when the query also
    /// constrains the name.
    ///
    /// The tracker does not reliably combine name and id matching, so the
    /// broader second query recovers releases whose internal title differs
    /// from the search term.
    fn requests_for(
        &self,
        query: NebulanceQuery,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> RequestChain {
        let mut chain = RequestChain::new();
        chain.add(self.paged_request(&query, limit, offset));

        if query.has_name() && query.has_positive_id() {
            let broad = query.with_name(None);
            chain.add(self.paged_request(&broad, limit, offset));
        }

        debug!(
            groups = chain.len(),
            name = ?query.name,
            tvmaze = ?query.tvmaze,
            imdb = ?query.imdb,
            "Built Nebulance request chain"
        );

        chain
    }
}

impl RequestGenerator for NebulanceRequestGenerator {
    fn basic_search_requests(&self, criteria: &BasicSearchCriteria) -> RequestChain {
        let mut query = NebulanceQuery::new();
        query.name = wildcard_pattern(&criteria.params.sanitized_search_term());

        self.requests_for(query, criteria.params.limit, criteria.params.offset)
    }

    fn tv_search_requests(&self, criteria: &TvSearchCriteria) -> RequestChain {
        let mut query = NebulanceQuery::new();
        query.name = wildcard_pattern(&criteria.sanitized_tv_search_string());

        let episode_pattern = wildcard_pattern(&criteria.episode_search_string());

        // TVMaze id takes priority; IMDb is only used without one.
        if let Some(tvmaze) = criteria.tvmaze_id {
            query.tvmaze = Some(tvmaze);
            if episode_pattern.is_some() {
                query.name = episode_pattern;
            }
        } else if let Some(imdb) = criteria
            .imdb_id
            .as_deref()
            .and_then(|id| id.trim().parse::<i32>().ok())
        {
            query.imdb = Some(imdb);
            if episode_pattern.is_some() {
                query.name = episode_pattern;
            }
        }

        self.requests_for(query, criteria.params.limit, criteria.params.offset)
    }
}
