//! Request signing — origin resolution and CSRF token generation.
//!
//! ## Security Model
//!
//! - **Backend callers** (a `secret_key` is configured): the origin is the fixed
//!   sentinel [`BACKEND_ORIGIN`], signalling a trusted caller exempt from real
//!   origin binding.
//! - **Browser callers**: the origin comes from an injected [`OriginProvider`].
//!   With the `wasm` feature on `wasm32`, [`BrowserOrigin`] reads
//!   `window.location.origin` and is used by default.
//! - No origin → the request is neither signed nor sent.
//!
//! The token is `hex(SHA-256(api_key ‖ origin))`. It carries no nonce,
//! timestamp or server challenge, so a captured token is replayable for as long
//! as the api key lives. It scopes requests to an origin; it is not real CSRF
//! protection.

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub mod browser;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub use browser::BrowserOrigin;

use sha2::{Digest, Sha256};

use crate::error::SdkError;
use crate::network::BACKEND_ORIGIN;

/// Source of the calling context's origin (scheme + host + port).
pub trait OriginProvider: Send + Sync {
    /// The current origin, or `None` when the context has none.
    fn origin(&self) -> Option<String>;
}

/// A fixed origin, for native callers that act on behalf of a known site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticOrigin(String);

impl StaticOrigin {
    pub fn new(origin: impl Into<String>) -> Self {
        Self(origin.into())
    }
}

impl OriginProvider for StaticOrigin {
    fn origin(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

impl<F> OriginProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn origin(&self) -> Option<String> {
        self()
    }
}

/// Resolve the origin a request is bound to.
///
/// A configured secret key always wins over the provider.
pub fn resolve_origin(
    secret_key: Option<&str>,
    provider: Option<&dyn OriginProvider>,
) -> Result<String, SdkError> {
    if secret_key.is_some() {
        return Ok(BACKEND_ORIGIN.to_string());
    }

    provider
        .and_then(|p| p.origin())
        .filter(|origin| !origin.trim().is_empty())
        .ok_or(SdkError::OriginUnavailable)
}

/// Derive the CSRF token for an `(api_key, origin)` pair.
///
/// Deterministic: the same pair always yields the same lowercase hex digest.
pub fn generate_token(api_key: &str, origin: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hasher.update(origin.as_bytes());
    hex::encode(hasher.finalize())
}

/// The provider used when the builder was given none.
pub(crate) fn default_origin_provider() -> Option<Box<dyn OriginProvider>> {
    #[cfg(all(feature = "wasm", target_arch = "wasm32"))]
    {
        Some(Box::new(BrowserOrigin))
    }
    #[cfg(not(all(feature = "wasm", target_arch = "wasm32")))]
    {
        None
    }
}
