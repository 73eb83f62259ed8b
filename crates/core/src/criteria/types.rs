use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::sanitize::sanitize_search_term;

/// Fields common to every kind of search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchParams {
    /// Free-text search term as entered by the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    /// Page size requested by the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Page offset requested by the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl SearchParams {
    pub fn with_term(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            ..Self::default()
        }
    }

    pub fn sanitized_search_term(&self) -> String {
        self.search_term
            .as_deref()
            .map(sanitize_search_term)
            .unwrap_or_default()
    }

    fn has_term(&self) -> bool {
        self.search_term
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }
}

/// Plain free-text search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BasicSearchCriteria {
    #[serde(flatten)]
    pub params: SearchParams,
}

/// TV search, optionally pinned to a season/episode or an external id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TvSearchCriteria {
    #[serde(flatten)]
    pub params: SearchParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
    /// Episode number, or `MM/dd` for daily shows where season is the year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvmaze_id: Option<i32>,
    /// IMDb id, numeric part only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,
}

impl TvSearchCriteria {
    /// Episode marker used in release names.
    ///
    /// - no season (or season 0): empty
    /// - season only: `S01`
    /// - numeric episode: `S01E02`
    /// - daily show (`2024`, `03/15`): `2024.03.15`
    /// - anything else: `S01E{episode}` verbatim
    pub fn episode_search_string(&self) -> String {
        let season = match self.season {
            Some(season) if season > 0 => season,
            _ => return String::new(),
        };

        let episode = match self.episode.as_deref().map(str::trim) {
            Some(episode) if !episode.is_empty() => episode,
            _ => return format!("S{:02}", season),
        };

        if season >= 1000 {
            if let Ok(air_date) =
                NaiveDate::parse_from_str(&format!("{} {}", season, episode), "%Y %m/%d")
            {
                return air_date.format("%Y.%m.%d").to_string();
            }
        }

        match episode.parse::<u32>() {
            Ok(number) => format!("S{:02}E{:02}", season, number),
            Err(_) => format!("S{:02}E{}", season, episode),
        }
    }

    /// Sanitized term followed by the episode marker.
    pub fn sanitized_tv_search_string(&self) -> String {
        let term = self.params.sanitized_search_term();
        let episode = self.episode_search_string();

        [term, episode]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn has_imdb_id(&self) -> bool {
        self.imdb_id.as_deref().is_some_and(|id| !id.trim().is_empty())
    }

    pub fn is_id_search(&self) -> bool {
        self.tvmaze_id.is_some() || self.has_imdb_id()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MovieSearchCriteria {
    #[serde(flatten)]
    pub params: SearchParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MusicSearchCriteria {
    #[serde(flatten)]
    pub params: SearchParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookSearchCriteria {
    #[serde(flatten)]
    pub params: SearchParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Search criteria, one variant per kind of search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchCriteria {
    Basic(BasicSearchCriteria),
    Tv(TvSearchCriteria),
    Movie(MovieSearchCriteria),
    Music(MusicSearchCriteria),
    Book(BookSearchCriteria),
}

impl SearchCriteria {
    /// Short label, used for logging and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchCriteria::Basic(_) => "search",
            SearchCriteria::Tv(_) => "tvsearch",
            SearchCriteria::Movie(_) => "movie",
            SearchCriteria::Music(_) => "music",
            SearchCriteria::Book(_) => "book",
        }
    }

    pub fn params(&self) -> &SearchParams {
        match self {
            SearchCriteria::Basic(c) => &c.params,
            SearchCriteria::Tv(c) => &c.params,
            SearchCriteria::Movie(c) => &c.params,
            SearchCriteria::Music(c) => &c.params,
            SearchCriteria::Book(c) => &c.params,
        }
    }

    /// Whether the search is pinned to an external identifier.
    pub fn is_id_search(&self) -> bool {
        match self {
            SearchCriteria::Tv(c) => c.is_id_search(),
            SearchCriteria::Movie(c) => c
                .imdb_id
                .as_deref()
                .is_some_and(|id| !id.trim().is_empty()),
            SearchCriteria::Basic(_) | SearchCriteria::Music(_) | SearchCriteria::Book(_) => false,
        }
    }

    /// A feed sweep: nothing to search for, just the latest releases.
    pub fn is_rss_search(&self) -> bool {
        if self.params().has_term() || self.is_id_search() {
            return false;
        }

        match self {
            SearchCriteria::Tv(c) => {
                c.season.is_none()
                    && c.episode.as_deref().map_or(true, |e| e.trim().is_empty())
            }
            SearchCriteria::Music(c) => c.artist.is_none() && c.album.is_none(),
            SearchCriteria::Book(c) => c.author.is_none() && c.title.is_none(),
            SearchCriteria::Basic(_) | SearchCriteria::Movie(_) => true,
        }
    }
}
