//! Outbound HTTP for indexer request descriptors.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{redirect::Policy, Client};
use thiserror::Error;
use tracing::debug;

use nebulance_core::{HttpMethod, IndexerConfig, IndexerRequest, IndexerResponse};

use crate::metrics::{TRACKER_REQUESTS_TOTAL, TRACKER_REQUEST_DURATION};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout")]
    Timeout,

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}

impl TransportError {
    fn label(&self) -> &'static str {
        match self {
            TransportError::ConnectionFailed(_) => "connect",
            TransportError::Timeout => "timeout",
            TransportError::HttpStatus { .. } => "status",
            TransportError::Request(_) | TransportError::Client(_) => "error",
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout
        } else if e.is_connect() {
            TransportError::ConnectionFailed(e.to_string())
        } else {
            TransportError::Request(e.to_string())
        }
    }
}

/// Executes request descriptors.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: &IndexerRequest) -> Result<IndexerResponse, TransportError>;
}

/// `reqwest`-backed transport.
///
/// Holds two clients because the redirect policy is fixed per client.
pub struct ReqwestTransport {
    client: Client,
    no_redirect_client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &IndexerConfig) -> Result<Self, TransportError> {
        let build = |policy: Policy| {
            let mut builder = Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs as u64))
                .redirect(policy);
            if let Some(user_agent) = &config.user_agent {
                builder = builder.user_agent(user_agent.clone());
            }
            builder
                .build()
                .map_err(|e| TransportError::Client(e.to_string()))
        };

        Ok(Self {
            client: build(Policy::default())?,
            no_redirect_client: build(Policy::none())?,
        })
    }

    async fn send(&self, request: &IndexerRequest) -> Result<IndexerResponse, TransportError> {
        let client = if request.follow_redirects {
            &self.client
        } else {
            &self.no_redirect_client
        };

        let mut builder = match request.method {
            HttpMethod::Get => client.get(&request.url),
            HttpMethod::Post => client.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() && !request.suppress_http_error {
            return Err(TransportError::HttpStatus {
                status: status.as_u16(),
                url: request.url.clone(),
            });
        }

        let content = response.text().await?;
        debug!(
            url = %request.url,
            status = status.as_u16(),
            bytes = content.len(),
            "Tracker request complete"
        );

        Ok(IndexerResponse::new(request.clone(), status.as_u16(), content))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: &IndexerRequest) -> Result<IndexerResponse, TransportError> {
        let timer = TRACKER_REQUEST_DURATION.start_timer();
        let result = self.send(request).await;
        timer.observe_duration();

        let outcome = match &result {
            Ok(_) => "ok",
            Err(e) => e.label(),
        };
        TRACKER_REQUESTS_TOTAL.with_label_values(&[outcome]).inc();

        result
    }
}
