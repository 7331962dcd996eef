//! High-level client — `MailflowClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use std::sync::Arc;

use crate::auth::{default_origin_provider, OriginProvider};
use crate::config::{ClientConfig, Profile};
use crate::domain::category::client::Categories;
use crate::domain::contact::client::Contacts;
use crate::domain::scenario::client::Scenarios;
use crate::error::SdkError;
use crate::http::{HttpTransport, MailflowHttp};

// Re-export sub-client types for convenience.
pub use crate::domain::category::client::Categories as CategoriesClient;
pub use crate::domain::contact::client::Contacts as ContactsClient;
pub use crate::domain::scenario::client::Scenarios as ScenariosClient;

/// The primary entry point for the Mailflow SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.contacts()`, `client.scenarios()`, `client.categories()`.
///
/// Cloning is cheap and clones share the transport. There is no mutable state,
/// so one client can serve concurrent callers.
#[derive(Clone)]
pub struct MailflowClient {
    pub(crate) http: MailflowHttp,
}

impl MailflowClient {
    pub fn builder(config: ClientConfig) -> MailflowClientBuilder {
        MailflowClientBuilder::new(config)
    }

    /// Build a client with the default transport and origin provider.
    pub fn new(config: ClientConfig) -> Result<Self, SdkError> {
        Self::builder(config).build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn contacts(&self) -> Contacts<'_> {
        Contacts { client: self }
    }

    pub fn scenarios(&self) -> Scenarios<'_> {
        Scenarios { client: self }
    }

    pub fn categories(&self) -> Categories<'_> {
        Categories { client: self }
    }

    // ── Introspection ────────────────────────────────────────────────────

    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    pub fn profile(&self) -> Profile {
        self.http.profile()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Origin the next signed request would be bound to.
    ///
    /// Returns the backend sentinel whenever a secret key is configured.
    pub fn resolve_origin(&self) -> Result<String, SdkError> {
        self.http.resolve_origin()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct MailflowClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn HttpTransport>>,
    origin_provider: Option<Arc<dyn OriginProvider>>,
}

impl MailflowClientBuilder {
    fn new(config: ClientConfig) -> Self {
        Self {
            config,
            transport: None,
            origin_provider: None,
        }
    }

    /// Send requests through a custom transport instead of reqwest.
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Where the origin of unsigned-by-secret requests comes from.
    ///
    /// Overrides the browser lookup used by default on WASM.
    pub fn origin_provider(mut self, provider: impl OriginProvider + 'static) -> Self {
        self.origin_provider = Some(Arc::new(provider));
        self
    }

    pub fn build(self) -> Result<MailflowClient, SdkError> {
        self.config.validate()?;

        let transport = match self.transport {
            Some(t) => t,
            None => default_transport()?,
        };
        let origin_provider = self
            .origin_provider
            .or_else(|| default_origin_provider().map(Arc::from));

        tracing::debug!(
            profile = %self.config.profile(),
            domain = %self.config.domain,
            "Building Mailflow client"
        );

        Ok(MailflowClient {
            http: MailflowHttp::new(
                crate::network::DEFAULT_API_URL,
                self.config,
                transport,
                origin_provider,
            ),
        })
    }
}

#[cfg(feature = "http")]
fn default_transport() -> Result<Arc<dyn HttpTransport>, SdkError> {
    let transport = crate::http::ReqwestTransport::new()?;
    Ok(Arc::new(transport))
}

#[cfg(not(feature = "http"))]
fn default_transport() -> Result<Arc<dyn HttpTransport>, SdkError> {
    Err(SdkError::Configuration(
        "no transport configured; enable the `http` feature or call `transport()`".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticOrigin;
    use crate::network::BACKEND_ORIGIN;

    #[test]
    fn test_build_rejects_invalid_config() {
        let result = MailflowClient::new(ClientConfig::new("", "shop.example"));
        assert!(matches!(result, Err(SdkError::Configuration(_))));
    }

    #[test]
    fn test_build_uses_fixed_base_url() {
        let client = MailflowClient::new(ClientConfig::new("key", "shop.example")).unwrap();
        assert_eq!(client.base_url(), crate::network::DEFAULT_API_URL);
        assert_eq!(client.profile(), Profile::Unsigned);
    }

    #[test]
    fn test_secret_key_beats_origin_provider() {
        let config = ClientConfig::new("key", "shop.example")
            .with_project_id("p1")
            .with_secret_key("s3cr3t");
        let client = MailflowClient::builder(config)
            .origin_provider(StaticOrigin::new("https://shop.example"))
            .build()
            .unwrap();
        assert_eq!(client.resolve_origin().unwrap(), BACKEND_ORIGIN);
    }

    #[test]
    fn test_native_default_has_no_origin() {
        let config = ClientConfig::new("key", "shop.example").with_project_id("p1");
        let client = MailflowClient::new(config).unwrap();
        assert!(matches!(
            client.resolve_origin(),
            Err(SdkError::OriginUnavailable)
        ));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<MailflowClient>();
    }
}
