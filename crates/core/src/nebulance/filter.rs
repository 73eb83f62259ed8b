use crate::criteria::SearchCriteria;
use crate::indexer::ReleaseInfo;
use crate::parsing::contains_ignore_case;

/// Drop releases that do not mention the requested episode.
///
/// Only applies to id-based TV searches with an episode marker, which is
/// exactly when the id-only fallback request may return other episodes.
pub fn filter_releases_by_query(
    releases: Vec<ReleaseInfo>,
    criteria: &SearchCriteria,
) -> Vec<ReleaseInfo> {
    let SearchCriteria::Tv(tv) = criteria else {
        return releases;
    };

    if criteria.is_rss_search() || !criteria.is_id_search() {
        return releases;
    }

    let episode = tv.episode_search_string();
    if episode.trim().is_empty() {
        return releases;
    }

    releases
        .into_iter()
        .filter(|r| !r.title.trim().is_empty() && contains_ignore_case(&r.title, &episode))
        .collect()
}
