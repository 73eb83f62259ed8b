//! Search API handler.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use nebulance_core::{
    BasicSearchCriteria, BookSearchCriteria, MovieSearchCriteria, MusicSearchCriteria,
    SearchCriteria, SearchParams, TvSearchCriteria,
};
use serde::{Deserialize, Serialize};

use crate::search::{run_search, SearchOutcome};
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

/// Newznab-style query string.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQueryParams {
    #[serde(default = "default_search_type")]
    pub t: String,
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub season: Option<u32>,
    #[serde(default)]
    pub ep: Option<String>,
    #[serde(default)]
    pub tvmazeid: Option<i32>,
    #[serde(default)]
    pub imdbid: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
}

fn default_search_type() -> String {
    "search".to_string()
}

impl SearchQueryParams {
    /// Criteria for the requested search type, or `None` for an unknown `t`.
    pub fn to_criteria(&self) -> Option<SearchCriteria> {
        let params = SearchParams {
            search_term: self.q.clone(),
            limit: self.limit,
            offset: self.offset,
        };

        let criteria = match self.t.as_str() {
            "search" => SearchCriteria::Basic(BasicSearchCriteria { params }),
            "tvsearch" => SearchCriteria::Tv(TvSearchCriteria {
                params,
                season: self.season,
                episode: self.ep.clone(),
                tvmaze_id: self.tvmazeid,
                imdb_id: self.imdbid.clone(),
            }),
            "movie" => SearchCriteria::Movie(MovieSearchCriteria {
                params,
                imdb_id: self.imdbid.clone(),
            }),
            "music" => SearchCriteria::Music(MusicSearchCriteria {
                params,
                artist: self.artist.clone(),
                album: self.album.clone(),
            }),
            "book" => SearchCriteria::Book(BookSearchCriteria {
                params,
                author: self.author.clone(),
                title: self.title.clone(),
            }),
            _ => return None,
        };

        Some(criteria)
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/search
///
/// Search the tracker and return merged, cleaned-up releases.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQueryParams>,
) -> Result<Json<SearchOutcome>, impl IntoResponse> {
    let Some(criteria) = params.to_criteria() else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Unknown search type '{}'", params.t),
            }),
        ));
    };

    let outcome = run_search(state.indexer(), state.transport(), &criteria).await;
    Ok(Json(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, Router};
    use http_body_util::BodyExt;
    use nebulance_core::{Config, IndexerConfig, ServerConfig};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::api::create_router;
    use crate::search::tests::{body, item, MockTransport};

    fn app(transport: Arc<MockTransport>) -> Router {
        let config = Config {
            server: ServerConfig::default(),
            indexer: IndexerConfig::new("https://nbl.example/", "secret-key"),
        };
        create_router(Arc::new(AppState::new(config, transport)))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[test]
    fn test_query_params_to_tv_criteria() {
        let params = SearchQueryParams {
            t: "tvsearch".to_string(),
            q: Some("Show".to_string()),
            season: Some(1),
            ep: Some("2".to_string()),
            tvmazeid: Some(179),
            ..SearchQueryParams::default()
        };

        match params.to_criteria() {
            Some(SearchCriteria::Tv(tv)) => {
                assert_eq!(tv.params.search_term.as_deref(), Some("Show"));
                assert_eq!(tv.episode_search_string(), "S01E02");
                assert_eq!(tv.tvmaze_id, Some(179));
            }
            other => panic!("expected tv criteria, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_search_type() {
        let params = SearchQueryParams {
            t: "anime".to_string(),
            ..SearchQueryParams::default()
        };
        assert!(params.to_criteria().is_none());
    }

    #[tokio::test]
    async fn test_search_endpoint_returns_releases() {
        let transport = Arc::new(MockTransport::ok(vec![body(vec![
            item("The.Wire.S01E01.720p", 10),
            item("The.Wire.S01E02.720p", 11),
        ])]));

        let (status, json) = get(app(transport.clone()), "/api/v1/search?q=the%20wire").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["releases"].as_array().unwrap().len(), 2);
        assert_eq!(json["releases"][0]["title"], "The.Wire.S01E01.720p");
        assert_eq!(json["errors"].as_array().unwrap().len(), 0);
        assert!(json["duration_ms"].is_u64());

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "https://nbl.example/api.php");
    }

    #[tokio::test]
    async fn test_tvsearch_endpoint_filters_other_episodes() {
        let transport = Arc::new(MockTransport::ok(vec![
            body(vec![item("Show S01E02", 1)]),
            body(vec![item("Show S01E02", 1), item("Show S01E03", 2)]),
        ]));

        let (status, json) = get(
            app(transport),
            "/api/v1/search?t=tvsearch&q=Show&season=1&ep=2&tvmazeid=179",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let releases = json["releases"].as_array().unwrap();
        assert_eq!(releases.len(), 1);
        assert_eq!(releases[0]["title"], "Show S01E02");
    }

    #[tokio::test]
    async fn test_search_endpoint_reports_tracker_error() {
        let error = serde_json::json!({"code": -32000, "message": "Invalid API key"});
        let transport = Arc::new(MockTransport::ok(vec![
            serde_json::json!({"result": null, "error": error}).to_string(),
        ]));

        let (status, json) = get(app(transport), "/api/v1/search?q=anything").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["releases"].as_array().unwrap().len(), 0);
        let error = json["errors"][0].as_str().unwrap();
        assert!(error.contains("Invalid API key"));
    }

    #[tokio::test]
    async fn test_unknown_type_is_bad_request() {
        let transport = Arc::new(MockTransport::ok(vec![]));
        let (status, json) = get(app(transport), "/api/v1/search?t=anime&q=x").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Unknown search type 'anime'");
    }

    #[tokio::test]
    async fn test_health_config_caps_and_metrics() {
        let transport = Arc::new(MockTransport::ok(vec![]));

        let (status, json) = get(app(transport.clone()), "/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");

        let (status, json) = get(app(transport.clone()), "/api/v1/config").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["indexer"]["api_key_configured"], true);
        assert!(!json.to_string().contains("secret-key"));

        let (status, json) = get(app(transport.clone()), "/api/v1/caps").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["name"], "Nebulance");
        assert_eq!(json["capabilities"]["categories"].as_array().unwrap().len(), 4);

        let request = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
        let response = app(transport).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("nebulance_http_requests_total"));
    }
}
