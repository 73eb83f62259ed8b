use crate::criteria::{
    BasicSearchCriteria, BookSearchCriteria, MovieSearchCriteria, MusicSearchCriteria,
    SearchCriteria, TvSearchCriteria,
};

use super::{IndexerError, IndexerResponse, ReleaseInfo, RequestChain};

/// Builds outbound requests for each kind of search.
///
/// Kinds the tracker cannot serve keep the default and yield an empty chain.
pub trait RequestGenerator: Send + Sync {
    fn basic_search_requests(&self, criteria: &BasicSearchCriteria) -> RequestChain;

    fn tv_search_requests(&self, _criteria: &TvSearchCriteria) -> RequestChain {
        RequestChain::new()
    }

    fn movie_search_requests(&self, _criteria: &MovieSearchCriteria) -> RequestChain {
        RequestChain::new()
    }

    fn music_search_requests(&self, _criteria: &MusicSearchCriteria) -> RequestChain {
        RequestChain::new()
    }

    fn book_search_requests(&self, _criteria: &BookSearchCriteria) -> RequestChain {
        RequestChain::new()
    }

    /// Dispatch on the criteria variant.
    fn search_requests(&self, criteria: &SearchCriteria) -> RequestChain {
        match criteria {
            SearchCriteria::Basic(c) => self.basic_search_requests(c),
            SearchCriteria::Tv(c) => self.tv_search_requests(c),
            SearchCriteria::Movie(c) => self.movie_search_requests(c),
            SearchCriteria::Music(c) => self.music_search_requests(c),
            SearchCriteria::Book(c) => self.book_search_requests(c),
        }
    }
}

/// Turns one raw response into releases, all or nothing.
pub trait ResponseParser: Send + Sync {
    fn parse_response(&self, response: &IndexerResponse) -> Result<Vec<ReleaseInfo>, IndexerError>;
}
