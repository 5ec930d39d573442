//! HTTP transport seam for the auth client.
//!
//! The browser build sends requests through `gloo-net` ([`GlooTransport`]);
//! native consumers supply their own [`Transport`] (the CLI wraps `reqwest`).
//! Futures are not required to be `Send` because browser fetch futures are not.

use async_trait::async_trait;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A single JSON request against the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Bearer token for the `Authorization` header, if any.
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            bearer: None,
            body: None,
        }
    }

    #[must_use]
    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            bearer: None,
            body: Some(body),
        }
    }

    #[must_use]
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {token}"))
    }
}

/// Raw response: status code plus the unparsed body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response (network down, CORS, DNS, ...).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[async_trait(?Send)]
pub trait Transport {
    /// Send one request and return whatever status the server answered with.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only when no response was received.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Browser `fetch` transport.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => gloo_net::http::Request::get(&request.url),
            Method::Post => gloo_net::http::Request::post(&request.url),
        };
        if let Some(value) = request.authorization() {
            builder = builder.header("Authorization", &value);
        }
        let built = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::new(e.to_string()))?;

        let resp = built
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}
