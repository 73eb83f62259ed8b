use serde::{Deserialize, Serialize};

/// Minimum-age filter sent with every search; skips entries still being
/// verified by the tracker.
pub const MIN_AGE_FILTER: &str = ">0";

/// Filter object passed to the tracker's `getTorrents` call.
///
/// Absent fields are left out of the serialized payload entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NebulanceQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvmaze: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// SQL-LIKE pattern matched against release names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
}

impl NebulanceQuery {
    /// Query with the minimum-age filter applied.
    pub fn new() -> Self {
        Self {
            age: Some(MIN_AGE_FILTER.to_string()),
            ..Self::default()
        }
    }

    /// Copy of this query with the name pattern replaced.
    pub fn with_name(&self, name: Option<String>) -> Self {
        Self {
            name,
            ..self.clone()
        }
    }

    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.trim().is_empty())
    }

    /// Whether a TVMaze or IMDb id with a positive value is set.
    pub fn has_positive_id(&self) -> bool {
        self.tvmaze.is_some_and(|id| id > 0) || self.imdb.is_some_and(|id| id > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_query_serializes_only_age() {
        let value = serde_json::to_value(NebulanceQuery::new()).unwrap();
        assert_eq!(value, json!({"age": ">0"}));
    }

    #[test]
    fn test_set_fields_serialize_with_tracker_names() {
        let query = NebulanceQuery {
            tvmaze: Some(179),
            name: Some("%S01E02%".to_string()),
            tags: Some(vec!["scene".to_string()]),
            ..NebulanceQuery::new()
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(
            value,
            json!({"age": ">0", "tvmaze": 179, "name": "%S01E02%", "tags": ["scene"]})
        );
    }

    #[test]
    fn test_with_name_leaves_source_untouched() {
        let original = NebulanceQuery {
            imdb: Some(306414),
            name: Some("%the%wire%".to_string()),
            ..NebulanceQuery::new()
        };

        let broad = original.with_name(None);

        assert_eq!(original.name.as_deref(), Some("%the%wire%"));
        assert!(broad.name.is_none());
        assert_eq!(broad.imdb, Some(306414));
        assert_eq!(broad.age.as_deref(), Some(MIN_AGE_FILTER));
    }

    #[test]
    fn test_has_positive_id() {
        let mut query = NebulanceQuery::new();
        assert!(!query.has_positive_id());

        query.tvmaze = Some(0);
        assert!(!query.has_positive_id());

        query.imdb = Some(-4);
        assert!(!query.has_positive_id());

        query.imdb = Some(4);
        assert!(query.has_positive_id());
    }

    #[test]
    fn test_has_name_ignores_blank() {
        let query = NebulanceQuery::new().with_name(Some(" ".to_string()));
        assert!(!query.has_name());
        assert!(NebulanceQuery::new()
            .with_name(Some("%x%".to_string()))
            .has_name());
    }
}
