//! # Mailflow SDK
//!
//! A Rust client for the Mailflow email-marketing API supporting both native
//! and WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Configuration, shared request types, domain payloads, errors
//! 2. **Auth** — Origin resolution + CSRF token signing
//! 3. **HTTP** — `MailflowHttp` dispatch over a pluggable `HttpTransport`
//! 4. **High-Level Client** — `MailflowClient` with nested sub-clients
//!
//! ## Profiles
//!
//! A [`ClientConfig`](config::ClientConfig) with a project id speaks the
//! **signed** contract: every request carries the project id, the caller's
//! origin and a token derived from the api key and that origin. Without a
//! project id the client speaks the **unsigned** contract (bearer + domain).
//!
//! ## Features
//!
//! `http` (default) provides [`ReqwestTransport`](http::ReqwestTransport) with a
//! rustls TLS backend on native targets. `wasm` adds browser origin probing.
//! Without `http`, a transport must be supplied to the builder.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mailflow_sdk::prelude::*;
//!
//! let config = ClientConfig::new("api-key", "shop.example")
//!     .with_project_id("project-1")
//!     .with_secret_key("secret");
//! let client = MailflowClient::new(config)?;
//!
//! let contact = client
//!     .contacts()
//!     .add(&AddContact::new("ada@example.com").with_name("Ada"))
//!     .await?;
//! client
//!     .scenarios()
//!     .trigger(&TriggerScenario::new("welcome", ContactRef::email("ada@example.com")))
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Client configuration and profile selection.
pub mod config;

/// Shared request types and argument checks.
pub mod shared;

/// Domain modules (vertical slices): payloads and sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network constants: base URL, sentinel origin, header names.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Origin resolution and request signing.
pub mod auth;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// Dispatch routine and transport seam.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `MailflowClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Configuration
    pub use crate::config::{ClientConfig, Profile};

    // Shared request types
    pub use crate::shared::{ContactRef, Page};

    // Domain payloads
    pub use crate::domain::contact::{AddContact, AddToCategories};
    pub use crate::domain::scenario::TriggerScenario;

    // Errors
    pub use crate::error::SdkError;

    // Network
    pub use crate::network::{BACKEND_ORIGIN, DEFAULT_API_URL};

    // Auth
    pub use crate::auth::{generate_token, OriginProvider, StaticOrigin};
    #[cfg(all(feature = "wasm", target_arch = "wasm32"))]
    pub use crate::auth::BrowserOrigin;

    // HTTP transport
    pub use crate::http::{HttpMethod, HttpTransport, RequestEnvelope, TransportResponse};
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;

    // Client + sub-clients
    pub use crate::client::{
        CategoriesClient, ContactsClient, MailflowClient, MailflowClientBuilder, ScenariosClient,
    };
}
