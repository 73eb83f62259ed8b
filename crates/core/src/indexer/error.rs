use thiserror::Error;

use super::IndexerResponse;

/// A fatal failure while handling one indexer response.
///
/// Carries the indexer's name and the offending response so callers can log
/// or surface exactly what the tracker sent back.
#[derive(Debug, Error)]
#[error("{indexer}: {kind}")]
pub struct IndexerError {
    pub indexer: String,
    pub response: Box<IndexerResponse>,
    #[source]
    pub kind: IndexerErrorKind,
}

impl IndexerError {
    pub fn new(
        indexer: impl Into<String>,
        response: &IndexerResponse,
        kind: IndexerErrorKind,
    ) -> Self {
        Self {
            indexer: indexer.into(),
            response: Box::new(response.clone()),
            kind,
        }
    }
}

#[derive(Debug, Error)]
pub enum IndexerErrorKind {
    /// Non-OK HTTP status.
    #[error("Unexpected response status '{0}' code from indexer request")]
    UnexpectedStatus(u16),

    /// Body did not decode as the expected JSON-RPC envelope.
    #[error("Unexpected response from indexer request: {0}")]
    InvalidResponse(String),

    /// Envelope carried an error, or no result.
    #[error("Indexer API call returned an error [{0}]")]
    Api(String),

    /// A required field of a record could not be parsed.
    #[error("Failed to parse {field} '{value}': {reason}")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl IndexerErrorKind {
    /// Short label for metrics and logs.
    pub fn label(&self) -> &'static str {
        match self {
            IndexerErrorKind::UnexpectedStatus(_) => "status",
            IndexerErrorKind::InvalidResponse(_) => "decode",
            IndexerErrorKind::Api(_) => "api",
            IndexerErrorKind::InvalidField { .. } => "field",
        }
    }
}
