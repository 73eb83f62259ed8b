//! Abstract search criteria handed to indexers.
//!
//! Criteria are a tagged union over the kinds of search an aggregator can
//! run. Indexers dispatch on the variant and derive the strings they need
//! (sanitized term, episode marker) from here.

mod sanitize;
mod types;

pub use sanitize::{sanitize_search_term, wildcard_pattern};
pub use types::*;
