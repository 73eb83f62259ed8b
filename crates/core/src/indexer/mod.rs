//! Indexer-agnostic contracts.
//!
//! An indexer turns abstract search criteria into a [`RequestChain`] of
//! outbound HTTP descriptors and turns each raw [`IndexerResponse`] back
//! into [`ReleaseInfo`] records. Issuing the requests is left to the caller.

mod error;
mod jsonrpc;
mod traits;
mod types;

pub use error::{IndexerError, IndexerErrorKind};
pub use jsonrpc::{JsonRpcRequestBuilder, JsonRpcResponse, JSON_RPC_CONTENT_TYPE};
pub use traits::{RequestGenerator, ResponseParser};
pub use types::*;
