//! Client configuration and API profile selection.

use std::fmt;

use crate::error::SdkError;

/// Which request shape the client speaks.
///
/// Chosen from configuration: a project id opts into the signed,
/// project-scoped contract; without one the client uses bearer + domain only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Project-scoped requests carrying origin and CSRF-token headers.
    Signed,
    /// Bearer + domain headers only; origin resolution and signing are skipped.
    Unsigned,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Signed => "signed",
            Self::Unsigned => "unsigned",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Credentials and account scoping for a [`MailflowClient`](crate::client::MailflowClient).
///
/// Immutable once handed to the client builder.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
    pub domain: String,
    pub project_id: Option<String>,
    pub secret_key: Option<String>,
}

impl ClientConfig {
    /// Config for the unsigned profile.
    pub fn new(api_key: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            domain: domain.into(),
            project_id: None,
            secret_key: None,
        }
    }

    /// Scope requests to a project. Switches the client to the signed profile.
    #[must_use]
    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Mark the caller as a trusted backend. Requires a project id.
    ///
    /// Requests are then bound to [`BACKEND_ORIGIN`](crate::network::BACKEND_ORIGIN)
    /// instead of a browser origin.
    #[must_use]
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    pub fn profile(&self) -> Profile {
        if self.project_id.is_some() {
            Profile::Signed
        } else {
            Profile::Unsigned
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Configuration`] if `api_key` or `domain` is blank, if
    /// an optional field was supplied but blank, or if a secret key is set
    /// without a project id.
    pub fn validate(&self) -> Result<(), SdkError> {
        require_field("api_key", Some(&self.api_key))?;
        require_field("domain", Some(&self.domain))?;
        if self.project_id.is_some() {
            require_field("project_id", self.project_id.as_deref())?;
        }
        if self.secret_key.is_some() {
            require_field("secret_key", self.secret_key.as_deref())?;
            // A secret key only means something to the signed profile.
            if self.project_id.is_none() {
                return Err(SdkError::Configuration(
                    "project_id is required when secret_key is set".to_string(),
                ));
            }
        }
        Ok(())
    }
}

fn require_field(name: &str, value: Option<&str>) -> Result<(), SdkError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(SdkError::Configuration(format!(
            "{} must be a non-empty string",
            name
        ))),
    }
}

// Credentials stay out of Debug output.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("domain", &self.domain)
            .field("project_id", &self.project_id)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
