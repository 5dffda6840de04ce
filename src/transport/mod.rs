//! Transport seam between the lookup service and the upstream score API.
//!
//! The service only ever needs one primitive: fetch a path, get back the
//! decoded response envelope or a classified [`TransportFailure`]. The
//! reqwest implementation lives in [`http`]; tests substitute canned
//! envelopes.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::error::TransportFailure;

pub mod http;

pub use http::HttpTransport;

/// Logical success code used by every upstream envelope.
pub const SUCCESS_CODE: i64 = 1000;

/// Upstream response envelope.
///
/// Every endpoint wraps its payload as `{ code, result }`; `code == 1000`
/// signals logical success regardless of HTTP status. Error envelopes may
/// carry a `message` instead of a `result`, and a body with no `code` at
/// all counts as a logical failure, not a decode error.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiEnvelope {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

/// Read-only JSON fetch against the score API.
#[async_trait]
pub trait ScoreTransport: Send + Sync {
    /// Issue a single GET for `path` (relative to the configured base URL)
    /// and decode the response envelope.
    async fn get(&self, path: &str) -> Result<ApiEnvelope, TransportFailure>;
}
