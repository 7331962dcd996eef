//! Shared request types and argument checks used across domains.

use std::fmt;

use serde::Serialize;

use crate::error::SdkError;

// ─── ContactRef ──────────────────────────────────────────────────────────────

/// How an operation identifies a contact.
///
/// Flattened into request bodies as either `"email"` or `"contact_id"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum ContactRef {
    #[serde(rename = "email")]
    Email(String),
    #[serde(rename = "contact_id")]
    Id(String),
}

impl ContactRef {
    pub fn email(email: impl Into<String>) -> Self {
        Self::Email(email.into())
    }

    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Email(v) | Self::Id(v) => v,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), SdkError> {
        match self {
            Self::Email(v) => require_non_empty("email", v),
            Self::Id(v) => require_non_empty("contact_id", v),
        }
    }
}

impl fmt::Display for ContactRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email(v) => write!(f, "email:{}", v),
            Self::Id(v) => write!(f, "id:{}", v),
        }
    }
}

// ─── Page ────────────────────────────────────────────────────────────────────

pub const DEFAULT_PER_PAGE: u32 = 20;
pub const MAX_PER_PAGE: u32 = 100;

/// 1-based pagination for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u32,
    pub per_page: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Page {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    pub(crate) fn validate(&self) -> Result<(), SdkError> {
        if self.page == 0 {
            return Err(SdkError::Validation("page starts at 1".to_string()));
        }
        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(SdkError::Validation(format!(
                "per_page must be between 1 and {}",
                MAX_PER_PAGE
            )));
        }
        Ok(())
    }

    pub(crate) fn query(&self) -> String {
        format!("page={}&per_page={}", self.page, self.per_page)
    }
}

// ─── Argument checks ─────────────────────────────────────────────────────────

pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), SdkError> {
    if value.trim().is_empty() {
        return Err(SdkError::Validation(format!("{} is required", field)));
    }
    Ok(())
}
