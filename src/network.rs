//! Network constants for the Mailflow SDK.

/// Fixed REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.mailflow.io";

/// Origin sent by trusted backend callers that hold a secret key.
pub const BACKEND_ORIGIN: &str = "backend-implementation";

// ── Request headers ──────────────────────────────────────────────────────────

pub const HEADER_DOMAIN: &str = "X-Domain";
pub const HEADER_PROJECT_ID: &str = "X-Project-Id";
pub const HEADER_ORIGIN: &str = "X-Origin";
pub const HEADER_CSRF_TOKEN: &str = "X-Csrf-Token";
