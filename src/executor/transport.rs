//! HTTP transport seam for the execution client.

use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Status and body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,

    /// Body text, `None` if it could not be read.
    pub body: Option<String>,
}

impl RawResponse {
    /// Whether the status is 2xx.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal HTTP client used by [`ExecutionClient`](super::ExecutionClient).
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` as JSON to `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be sent.
    async fn post_json(&self, url: &str, body: &Value) -> Result<RawResponse>;

    /// GET `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be sent.
    async fn get(&self, url: &str) -> Result<RawResponse>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with a default client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    async fn read(response: reqwest::Response) -> RawResponse {
        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::debug!(status, error = %e, "failed to read response body");
                None
            }
        };
        RawResponse { status, body }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<RawResponse> {
        let response = self.client.post(url).json(body).send().await?;
        Ok(Self::read(response).await)
    }

    async fn get(&self, url: &str) -> Result<RawResponse> {
        let response = self.client.get(url).send().await?;
        Ok(Self::read(response).await)
    }
}

/// Transport replaying one canned response, for command tests.
#[cfg(test)]
pub(crate) struct CannedTransport(pub RawResponse);

#[cfg(test)]
impl CannedTransport {
    pub(crate) fn ok(body: &Value) -> Self {
        Self(RawResponse {
            status: 200,
            body: Some(body.to_string()),
        })
    }
}

#[cfg(test)]
#[async_trait]
impl Transport for CannedTransport {
    async fn post_json(&self, _url: &str, _body: &Value) -> Result<RawResponse> {
        Ok(self.0.clone())
    }

    async fn get(&self, _url: &str) -> Result<RawResponse> {
        Ok(self.0.clone())
    }
}
