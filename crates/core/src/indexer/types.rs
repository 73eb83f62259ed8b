//! Types shared by all indexer implementations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// HTTP method of an outbound request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

/// Descriptor of one outbound HTTP call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexerRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Request headers as (name, value) pairs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Hand non-2xx responses to the parser instead of failing in transport,
    /// so tracker-specific error text can be surfaced.
    #[serde(default)]
    pub suppress_http_error: bool,
    /// Follow HTTP redirects.
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,
}

fn default_follow_redirects() -> bool {
    true
}

impl IndexerRequest {
    /// Plain GET request with default transport behavior.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
            suppress_http_error: false,
            follow_redirects: true,
        }
    }

    /// Value of the first header matching `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A raw HTTP response paired with the request that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexerResponse {
    pub request: IndexerRequest,
    pub status: u16,
    pub content: String,
}

impl IndexerResponse {
    pub fn new(request: IndexerRequest, status: u16, content: impl Into<String>) -> Self {
        Self {
            request,
            status,
            content: content.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Requests the caller issues and aggregates together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestGroup(Vec<IndexerRequest>);

impl RequestGroup {
    pub fn new(requests: Vec<IndexerRequest>) -> Self {
        Self(requests)
    }

    pub fn single(request: IndexerRequest) -> Self {
        Self(vec![request])
    }

    pub fn requests(&self) -> &[IndexerRequest] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for RequestGroup {
    type Item = IndexerRequest;
    type IntoIter = std::vec::IntoIter<IndexerRequest>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Ordered groups of requests produced for one search.
///
/// Groups are independent; callers may issue them concurrently but should
/// merge results in group order so de-duplication keeps the earlier hit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestChain {
    groups: Vec<RequestGroup>,
}

impl RequestChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group; empty groups are ignored.
    pub fn add(&mut self, group: RequestGroup) {
        if !group.is_empty() {
            self.groups.push(group);
        }
    }

    pub fn groups(&self) -> &[RequestGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over every request across all groups, in order.
    pub fn requests(&self) -> impl Iterator<Item = &IndexerRequest> {
        self.groups.iter().flat_map(|g| g.requests())
    }
}

impl IntoIterator for RequestChain {
    type Item = RequestGroup;
    type IntoIter = std::vec::IntoIter<RequestGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Newznab-standard TV categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IndexerCategory {
    Tv,
    TvSd,
    TvHd,
    TvUhd,
}

impl IndexerCategory {
    /// Newznab numeric category id.
    pub fn id(&self) -> u32 {
        match self {
            IndexerCategory::Tv => 5000,
            IndexerCategory::TvSd => 5030,
            IndexerCategory::TvHd => 5040,
            IndexerCategory::TvUhd => 5045,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            IndexerCategory::Tv => "TV",
            IndexerCategory::TvSd => "TV/SD",
            IndexerCategory::TvHd => "TV/HD",
            IndexerCategory::TvUhd => "TV/UHD",
        }
    }
}

/// A normalized release as handed to the aggregator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReleaseInfo {
    pub title: String,
    /// Stable identifier, unique per release on this indexer.
    pub guid: String,
    /// Details page on the tracker.
    pub info_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    pub categories: Vec<IndexerCategory>,
    /// Size in bytes.
    pub size: u64,
    /// Number of files in the torrent.
    pub files: usize,
    pub publish_date: DateTime<Utc>,
    pub grabs: u32,
    pub seeders: u32,
    /// Seeders plus leechers.
    pub peers: u32,
    /// `None` when the tracker did not report tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<bool>,
    pub minimum_ratio: f64,
    /// Minimum seed time in seconds.
    pub minimum_seed_time: u64,
    pub download_volume_factor: f64,
    pub upload_volume_factor: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvmaze_id: Option<u32>,
}

/// Search parameters an indexer accepts for TV searches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TvSearchParam {
    Q,
    Season,
    Ep,
    ImdbId,
    TvMazeId,
}

/// Mapping from a tracker category id to a standard category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryMapping {
    pub tracker_id: String,
    pub category: IndexerCategory,
}

/// What an indexer can search for.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IndexerCapabilities {
    pub tv_search_params: Vec<TvSearchParam>,
    pub supports_raw_search: bool,
    pub categories: Vec<CategoryMapping>,
}

impl IndexerCapabilities {
    pub fn add_category_mapping(
        &mut self,
        tracker_id: impl Into<String>,
        category: IndexerCategory,
    ) {
        self.categories.push(CategoryMapping {
            tracker_id: tracker_id.into(),
            category,
        });
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IndexerPrivacy {
    Public,
    SemiPrivate,
    Private,
}

/// Static description of an indexer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexerInfo {
    pub name: String,
    pub urls: Vec<String>,
    pub description: String,
    pub language: String,
    pub privacy: IndexerPrivacy,
    pub supports_pagination: bool,
    pub supports_redirect: bool,
    pub capabilities: IndexerCapabilities,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str) -> IndexerRequest {
        IndexerRequest::get(url)
    }

    #[test]
    fn test_request_chain_skips_empty_groups() {
        let mut chain = RequestChain::new();
        chain.add(RequestGroup::default());
        assert!(chain.is_empty());

        chain.add(RequestGroup::single(request("http://a/")));
        chain.add(RequestGroup::new(vec![request("http://b/"), request("http://c/")]));
        assert_eq!(chain.len(), 2);

        let urls: Vec<_> = chain.requests().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["http://a/", "http://b/", "http://c/"]);
    }

    #[test]
    fn test_request_header_lookup_is_case_insensitive() {
        let mut req = request("http://a/");
        req.headers
            .push(("Content-Type".to_string(), "application/json-rpc".to_string()));
        assert_eq!(req.header("content-type"), Some("application/json-rpc"));
        assert_eq!(req.header("accept"), None);
    }

    #[test]
    fn test_category_ids() {
        assert_eq!(IndexerCategory::Tv.id(), 5000);
        assert_eq!(IndexerCategory::TvSd.id(), 5030);
        assert_eq!(IndexerCategory::TvHd.id(), 5040);
        assert_eq!(IndexerCategory::TvUhd.id(), 5045);
        assert_eq!(IndexerCategory::TvUhd.name(), "TV/UHD");
    }

    #[test]
    fn test_category_serialization() {
        assert_eq!(
            serde_json::to_string(&IndexerCategory::TvHd).unwrap(),
            "\"tv_hd\""
        );
    }

    #[test]
    fn test_capabilities_mapping() {
        let mut caps = IndexerCapabilities::default();
        caps.add_category_mapping("2", IndexerCategory::TvSd);
        caps.tv_search_params.push(TvSearchParam::TvMazeId);

        assert_eq!(
            caps.categories,
            vec![CategoryMapping {
                tracker_id: "2".to_string(),
                category: IndexerCategory::TvSd,
            }]
        );
        assert_eq!(caps.tv_search_params, vec![TvSearchParam::TvMazeId]);
    }
}
