// ============================================================================
// Nav Infrastructure - Reqwest Transport
// File: crates/nav-infrastructure/src/http/reqwest_transport.rs
// ============================================================================

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, warn};

use nav_core::ports::{HttpTransport, TransportError};

/// Error body the backend sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub struct ReqwestTransport {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ReqwestTransport {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Bearer token sent as `Authorization` on every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str, params: &[(String, String)]) -> Result<Url, TransportError> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let parsed = if params.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, params)
        };
        parsed.map_err(|e| {
            error!("Invalid request url {}: {}", raw, e);
            TransportError::new(None, Some(e.to_string()))
        })
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, TransportError> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            warn!("Request failed before a response arrived: {}", e);
            TransportError::new(e.status().map(|s| s.as_u16()), None)
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            warn!("Request returned {}: {:?}", status, message);
            return Err(TransportError::new(Some(status.as_u16()), message));
        }

        // An undecodable body is no structured response at all.
        response.json::<Value>().await.map_err(|e| {
            warn!("Response {} body is not JSON: {}", status, e);
            TransportError::unreachable()
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, params: &[(String, String)]) -> Result<Value, TransportError> {
        let url = self.url(url, params)?;
        debug!("GET {}", url);
        self.send(self.client.get(url)).await
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Value, TransportError> {
        let url = self.url(url, &[])?;
        debug!("POST {}", url);
        self.send(self.client.post(url).json(body)).await
    }
}
