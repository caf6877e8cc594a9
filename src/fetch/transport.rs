use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;

/// An HTTP response reduced to the parts the concert pipeline looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    /// Build a response using the canonical reason phrase for `status`.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let status_text = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or_default()
            .to_owned();
        Self {
            status,
            status_text,
            body: body.into(),
        }
    }
}

/// The HTTP capability used to reach the concert endpoint.
///
/// Implementations return `Err` only when no response was obtained at all
/// (DNS, connect, reset, body read). Any status code, including errors, is
/// returned as an `Ok` response for the caller to interpret.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        self.as_ref().get(url).await
    }
}

/// [`Transport`] backed by a [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        debug!(url, "sending request");

        let response = self.http.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse::new(status, body))
    }
}
