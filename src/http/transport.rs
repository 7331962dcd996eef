//! Transport seam — the one place bytes leave the SDK.
//!
//! [`MailflowHttp`](super::MailflowHttp) builds a [`RequestEnvelope`] and hands
//! it to an [`HttpTransport`]. The default transport wraps `reqwest`; callers
//! can inject their own through
//! [`MailflowClientBuilder::transport`](crate::client::MailflowClientBuilder::transport).

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::HttpError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully built request: absolute URL, every header, optional JSON body.
///
/// Built fresh for each call and consumed by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestEnvelope {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestEnvelope {
    /// First header value whose name matches case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and raw body of whatever the upstream answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes a [`RequestEnvelope`].
///
/// Any answer from the server, including 4xx/5xx, is a `TransportResponse`.
/// `Err` is reserved for requests that never produced a response or could not
/// be built.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: RequestEnvelope) -> Result<TransportResponse, HttpError>;
}

// ── reqwest ──────────────────────────────────────────────────────────────────

#[cfg(feature = "http")]
pub use reqwest_transport::ReqwestTransport;

#[cfg(feature = "http")]
mod reqwest_transport {
    use super::*;

    use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
    use reqwest::Client;

    /// Default transport, backed by a pooled `reqwest::Client`.
    ///
    /// No timeout is set; requests live as long as reqwest's defaults allow.
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: Client,
    }

    impl ReqwestTransport {
        pub fn new() -> Result<Self, HttpError> {
            let mut builder = Client::builder();
            #[cfg(not(target_arch = "wasm32"))]
            {
                builder = builder.use_rustls_tls().pool_max_idle_per_host(10);
            }
            Ok(Self {
                client: builder.build()?,
            })
        }

        /// Use a preconfigured `reqwest::Client` (proxies, TLS roots, timeouts).
        pub fn with_client(client: Client) -> Self {
            Self { client }
        }
    }

    #[cfg_attr(not(target_arch = "wasm32"), async_trait)]
    #[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
    impl HttpTransport for ReqwestTransport {
        async fn send(&self, request: RequestEnvelope) -> Result<TransportResponse, HttpError> {
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
            };

            let mut headers = HeaderMap::with_capacity(request.headers.len());
            for (name, value) in &request.headers {
                let name = HeaderName::from_bytes(name.as_bytes())
                    .map_err(|e| HttpError::InvalidRequest(format!("header {}: {}", name, e)))?;
                let value = HeaderValue::from_str(value).map_err(|e| {
                    HttpError::InvalidRequest(format!("value of header {}: {}", name, e))
                })?;
                headers.insert(name, value);
            }

            let mut req = self.client.request(method, &request.url).headers(headers);
            if let Some(body) = &request.body {
                req = req.json(body);
            }

            let resp = req.send().await?;
            let status = resp.status().as_u16();
            let body = resp.text().await?;

            Ok(TransportResponse { status, body })
        }
    }
}
