//! Contact domain — registering contacts and assigning them to categories.

pub mod client;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::SdkError;
use crate::shared::{require_non_empty, ContactRef};

/// Request body for `POST /contacts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddContact {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Arbitrary extra attributes. Shape is the upstream's business.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
}

impl AddContact {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_custom_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.custom_fields
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_custom_fields(mut self, fields: Map<String, Value>) -> Self {
        self.custom_fields = Some(fields);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), SdkError> {
        require_non_empty("email", &self.email)
    }
}

/// Request body for `POST /contacts/categories`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddToCategories {
    #[serde(flatten)]
    pub contact: ContactRef,
    pub categories: Vec<String>,
}

impl AddToCategories {
    pub fn new<I, S>(contact: ContactRef, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            contact,
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), SdkError> {
        self.contact.validate()?;
        if self.categories.is_empty() {
            return Err(SdkError::Validation(
                "categories must contain at least one entry".to_string(),
            ));
        }
        if self.categories.iter().any(|c| c.trim().is_empty()) {
            return Err(SdkError::Validation(
                "categories must not contain empty entries".to_string(),
            ));
        }
        Ok(())
    }
}
