//! reqwest-backed implementation of [`ScoreTransport`].

use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::error::TransportFailure;

use super::{ApiEnvelope, ScoreTransport};

/// HTTP transport over a shared [`reqwest::Client`].
///
/// The client owns the timeout budget; a request that exceeds it surfaces
/// as [`TransportFailure::timeout`].
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport from the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportFailure> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| TransportFailure::unknown(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl ScoreTransport for HttpTransport {
    async fn get(&self, path: &str) -> Result<ApiEnvelope, TransportFailure> {
        let url = self.url(path);
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify_reqwest_error)?;

        let status = response.status();
        let body = response.text().await.map_err(classify_reqwest_error)?;

        if status.is_client_error() || status.is_server_error() {
            // Error responses may still carry an envelope with a message.
            let server_message = serde_json::from_str::<ApiEnvelope>(&body)
                .ok()
                .and_then(|envelope| envelope.message);
            log::warn!("GET {url} failed with status {status}");
            return Err(TransportFailure::http_status(status.as_u16(), server_message));
        }

        serde_json::from_str(&body)
            .map_err(|e| TransportFailure::unknown(format!("invalid response body: {e}")))
    }
}

fn classify_reqwest_error(err: reqwest::Error) -> TransportFailure {
    if err.is_timeout() {
        TransportFailure::timeout()
    } else if err.is_connect() {
        TransportFailure::unreachable()
    } else if let Some(status) = err.status() {
        TransportFailure::http_status(status.as_u16(), None)
    } else {
        TransportFailure::unknown(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining_normalizes_slashes() {
        let config = ClientConfig::new("http://localhost:8080/api/v1/");
        let transport = HttpTransport::new(&config).unwrap();

        assert_eq!(
            transport.url("/scores/123456"),
            "http://localhost:8080/api/v1/scores/123456"
        );
        assert_eq!(
            transport.url("scores/report/top10"),
            "http://localhost:8080/api/v1/scores/report/top10"
        );
    }
}
