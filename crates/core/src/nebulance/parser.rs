//! Maps `getTorrents` responses onto [`ReleaseInfo`].

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::IndexerConfig;
use crate::indexer::{
    IndexerError, IndexerErrorKind, IndexerResponse, JsonRpcResponse, ReleaseInfo, ResponseParser,
};
use crate::parsing::{
    coerce_u32, coerce_u64, list_contains_ignore_case, opt_string_or_number, parse_utc_date,
    tv_category_from_title,
};

use super::NEBULANCE_NAME;

/// Seed time for full-season packs: 120 hours.
pub const SEASON_MIN_SEED_TIME: u64 = 432_000;
/// Seed time for everything else: 24 hours.
pub const EPISODE_MIN_SEED_TIME: u64 = 86_400;

pub struct NebulanceParser {
    base_url: String,
}

impl NebulanceParser {
    pub fn new(config: &IndexerConfig) -> Self {
        Self {
            base_url: config.base_url(),
        }
    }

    fn error(&self, response: &IndexerResponse, kind: IndexerErrorKind) -> IndexerError {
        IndexerError::new(NEBULANCE_NAME, response, kind)
    }

    /// Decode the envelope, surfacing a string result as the error detail
    /// when the expected shape does not match.
    fn decode(&self, response: &IndexerResponse) -> Result<NebulanceTorrents, IndexerError> {
        let envelope: JsonRpcResponse<NebulanceTorrents> =
            serde_json::from_str(&response.content).map_err(|e| {
                let detail = serde_json::from_str::<JsonRpcResponse<String>>(&response.content)
                    .ok()
                    .and_then(|r| r.result)
                    .unwrap_or_else(|| e.to_string());
                self.error(response, IndexerErrorKind::InvalidResponse(detail))
            })?;

        match (envelope.error, envelope.result) {
            (None, Some(result)) => Ok(result),
            (error, _) => {
                let detail = error
                    .as_ref()
                    .map(error_text)
                    .unwrap_or_else(|| "null".to_string());
                Err(self.error(response, IndexerErrorKind::Api(detail)))
            }
        }
    }

    fn to_release(
        &self,
        response: &IndexerResponse,
        row: NebulanceTorrent,
    ) -> Result<ReleaseInfo, IndexerError> {
        let publish_raw = row.publish_date_utc.unwrap_or_default();
        let publish_date = parse_utc_date(&publish_raw).map_err(|e| {
            self.error(
                response,
                IndexerErrorKind::InvalidField {
                    field: "rls_utc",
                    value: publish_raw.clone(),
                    reason: e.to_string(),
                },
            )
        })?;

        let details = format!(
            "{}torrents.php?id={}",
            self.base_url,
            row.group_id.unwrap_or_default()
        );

        let release_title = row.release_title.unwrap_or_default();
        let category = tv_category_from_title(&release_title);
        let title = if release_title.trim().is_empty() {
            row.group_name.unwrap_or_default()
        } else {
            release_title
        };

        let seeders = coerce_u32(row.seed.as_deref().unwrap_or_default());
        let leechers = coerce_u32(row.leech.as_deref().unwrap_or_default());

        let is_season = row
            .category
            .as_deref()
            .is_some_and(|c| c.to_lowercase() == "season");

        let tvmaze_id = row
            .tvmaze_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .map(coerce_u32);

        Ok(ReleaseInfo {
            title,
            guid: details.clone(),
            info_url: details,
            download_url: row.download,
            poster_url: row.banner,
            categories: vec![category],
            size: coerce_u64(row.size.as_deref().unwrap_or_default()),
            files: row.file_list.map(|files| files.len()).unwrap_or(0),
            publish_date,
            grabs: coerce_u32(row.snatch.as_deref().unwrap_or_default()),
            seeders,
            peers: seeders.saturating_add(leechers),
            scene: row
                .tags
                .as_deref()
                .map(|tags| list_contains_ignore_case(tags, "scene")),
            // Ratioless tracker: nothing counts against the user.
            minimum_ratio: 0.0,
            minimum_seed_time: if is_season {
                SEASON_MIN_SEED_TIME
            } else {
                EPISODE_MIN_SEED_TIME
            },
            download_volume_factor: 0.0,
            upload_volume_factor: 1.0,
            tvmaze_id,
        })
    }
}

impl ResponseParser for NebulanceParser {
    fn parse_response(&self, response: &IndexerResponse) -> Result<Vec<ReleaseInfo>, IndexerError> {
        if !response.is_ok() {
            return Err(self.error(response, IndexerErrorKind::UnexpectedStatus(response.status)));
        }

        let torrents = self.decode(response)?;
        let rows = torrents.items.unwrap_or_default();

        debug!(
            items = rows.len(),
            results = ?torrents.results,
            "Decoded Nebulance response"
        );

        rows.into_iter()
            .map(|row| self.to_release(response, row))
            .collect()
    }
}

/// Error payload as text; bare strings lose their JSON quotes.
fn error_text(error: &Value) -> String {
    match error {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// Nebulance API response types
#[derive(Debug, Deserialize)]
struct NebulanceTorrents {
    #[serde(default)]
    items: Option<Vec<NebulanceTorrent>>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    results: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NebulanceTorrent {
    #[serde(rename = "rls_name", default)]
    release_title: Option<String>,
    #[serde(rename = "cat", default)]
    category: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    size: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    seed: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    leech: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    snatch: Option<String>,
    #[serde(default)]
    download: Option<String>,
    #[serde(default)]
    file_list: Option<Vec<Value>>,
    #[serde(default)]
    group_name: Option<String>,
    #[serde(rename = "series_banner", default)]
    banner: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    group_id: Option<String>,
    #[serde(rename = "series_id", default, deserialize_with = "opt_string_or_number")]
    tvmaze_id: Option<String>,
    #[serde(rename = "rls_utc", default)]
    publish_date_utc: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
}
