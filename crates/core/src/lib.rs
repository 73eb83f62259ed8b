pub mod config;
pub mod criteria;
pub mod indexer;
pub mod metrics;
pub mod nebulance;
pub mod parsing;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, IndexerConfig,
    SanitizedConfig, ServerConfig,
};
pub use criteria::{
    BasicSearchCriteria, BookSearchCriteria, MovieSearchCriteria, MusicSearchCriteria,
    SearchCriteria, SearchParams, TvSearchCriteria,
};
pub use indexer::{
    HttpMethod, IndexerCapabilities, IndexerCategory, IndexerError, IndexerErrorKind, IndexerInfo,
    IndexerPrivacy, IndexerRequest, IndexerResponse, ReleaseInfo, RequestChain, RequestGenerator,
    RequestGroup, ResponseParser, TvSearchParam,
};
pub use nebulance::{Nebulance, NebulanceParser, NebulanceRequestGenerator};
