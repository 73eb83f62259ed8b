//! JSON-RPC 1.0/2.0 style envelopes used by API-driven trackers.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{HttpMethod, IndexerRequest};

pub const JSON_RPC_CONTENT_TYPE: &str = "application/json-rpc";

/// Builds a POST request carrying a single JSON-RPC method call.
///
/// ```rust,ignore
/// let request = JsonRpcRequestBuilder::new("https://tracker/api.php")
///     .call("getTorrents", json!(["key", {}, 100, 0]))
///     .suppress_http_error(true)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct JsonRpcRequestBuilder {
    url: String,
    method: String,
    params: Value,
    suppress_http_error: bool,
}

impl JsonRpcRequestBuilder {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: String::new(),
            params: Value::Array(Vec::new()),
            suppress_http_error: false,
        }
    }

    /// Set the remote method and its positional parameters.
    pub fn call(mut self, method: impl Into<String>, params: Value) -> Self {
        self.method = method.into();
        self.params = params;
        self
    }

    pub fn suppress_http_error(mut self, suppress: bool) -> Self {
        self.suppress_http_error = suppress;
        self
    }

    pub fn build(self) -> IndexerRequest {
        let body = json!({
            "jsonrpc": "2.0",
            "method": self.method,
            "params": self.params,
            "id": next_request_id(),
        });

        IndexerRequest {
            method: HttpMethod::Post,
            url: self.url,
            headers: vec![
                ("Content-Type".to_string(), JSON_RPC_CONTENT_TYPE.to_string()),
                ("Accept".to_string(), JSON_RPC_CONTENT_TYPE.to_string()),
            ],
            body: Some(body.to_string()),
            suppress_http_error: self.suppress_http_error,
            follow_redirects: true,
        }
    }
}

/// Random 8 hex char request id.
fn next_request_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// Response envelope; `error` is kept as raw JSON since trackers disagree
/// on its shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse<T> {
    #[serde(default)]
    pub id: Option<Value>,
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<Value>,
}
