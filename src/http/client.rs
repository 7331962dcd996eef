//! Low-level HTTP client — `MailflowHttp`.
//!
//! Owns the dispatch routine every public operation funnels into: resolve
//! origin, sign, attach headers, send, classify. Internal to the SDK — the
//! sub-clients in `domain/<name>/client.rs` wrap it.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing;

use crate::auth::{generate_token, resolve_origin, OriginProvider};
use crate::config::{ClientConfig, Profile};
use crate::error::SdkError;
use crate::http::transport::{HttpMethod, HttpTransport, RequestEnvelope, TransportResponse};
use crate::network::{HEADER_CSRF_TOKEN, HEADER_DOMAIN, HEADER_ORIGIN, HEADER_PROJECT_ID};

/// Low-level HTTP client for the Mailflow REST API.
#[derive(Clone)]
pub struct MailflowHttp {
    base_url: String,
    config: Arc<ClientConfig>,
    transport: Arc<dyn HttpTransport>,
    origin_provider: Option<Arc<dyn OriginProvider>>,
}

impl MailflowHttp {
    pub(crate) fn new(
        base_url: &str,
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        origin_provider: Option<Arc<dyn OriginProvider>>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            config: Arc::new(config),
            transport,
            origin_provider,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn profile(&self) -> Profile {
        self.config.profile()
    }

    /// Origin this client would bind the next request to.
    pub fn resolve_origin(&self) -> Result<String, SdkError> {
        resolve_origin(
            self.config.secret_key.as_deref(),
            self.origin_provider.as_deref(),
        )
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    pub(crate) async fn get(&self, path: &str) -> Result<Value, SdkError> {
        self.dispatch(HttpMethod::Get, path, None::<&()>).await
    }

    pub(crate) async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, SdkError> {
        self.dispatch(HttpMethod::Post, path, Some(body)).await
    }

    /// Sign and send one request, returning the upstream JSON untouched.
    pub(crate) async fn dispatch<B: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value, SdkError> {
        let headers = self.headers()?;
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| SdkError::UnexpectedClient(format!("encoding request body: {}", e)))?;

        let request = RequestEnvelope {
            method,
            url: format!("{}{}", self.base_url, path),
            headers,
            body,
        };

        tracing::debug!(
            method = %method,
            path,
            profile = %self.profile(),
            "Dispatching request"
        );

        let response = match self.transport.send(request).await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::debug!(method = %method, path, error = %e, "Request failed");
                return Err(e.into());
            }
        };

        tracing::debug!(method = %method, path, status = response.status, "Response received");

        classify(response)
    }

    /// Header set for the configured profile. Signs the request when signed.
    fn headers(&self) -> Result<Vec<(String, String)>, SdkError> {
        let mut headers = vec![
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.config.api_key),
            ),
            ("Content-Type".to_string(), "application/json".to_string()),
            (HEADER_DOMAIN.to_string(), self.config.domain.clone()),
        ];

        if let Some(project_id) = &self.config.project_id {
            let origin = self.resolve_origin()?;
            let token = generate_token(&self.config.api_key, &origin);
            headers.push((HEADER_PROJECT_ID.to_string(), project_id.clone()));
            headers.push((HEADER_ORIGIN.to_string(), origin));
            headers.push((HEADER_CSRF_TOKEN.to_string(), token));
        }

        Ok(headers)
    }
}

/// Turn a raw response into the parsed body or a classified error.
fn classify(response: TransportResponse) -> Result<Value, SdkError> {
    if response.is_success() {
        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        return serde_json::from_str(&response.body).map_err(|e| {
            SdkError::UnexpectedClient(format!("decoding response body: {}", e))
        });
    }

    Err(SdkError::UpstreamApi {
        status: response.status,
        message: upstream_message(&response.body),
    })
}

/// Best human-readable message in an error body.
///
/// Looks at `message`, then `error` (string or `{ message }`), then falls back
/// to the raw text.
fn upstream_message(body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        if let Some(Value::String(message)) = map.get("message") {
            return message.clone();
        }
        match map.get("error") {
            Some(Value::String(error)) => return error.clone(),
            Some(Value::Object(error)) => {
                if let Some(Value::String(message)) = error.get("message") {
                    return message.clone();
                }
            }
            _ => {}
        }
    }
    body.trim().to_string()
}
