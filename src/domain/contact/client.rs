//! Contacts sub-client — add, fetch, categorize.

use serde_json::Value;

use crate::client::MailflowClient;
use crate::domain::contact::{AddContact, AddToCategories};
use crate::error::SdkError;
use crate::shared::require_non_empty;

pub struct Contacts<'a> {
    pub(crate) client: &'a MailflowClient,
}

impl<'a> Contacts<'a> {
    /// Register a contact, with optional name and custom fields.
    pub async fn add(&self, request: &AddContact) -> Result<Value, SdkError> {
        request.validate()?;
        self.client.http.post("/contacts", request).await
    }

    /// Fetch a contact by its upstream id.
    pub async fn get(&self, contact_id: &str) -> Result<Value, SdkError> {
        require_non_empty("contact_id", contact_id)?;
        let path = format!("/contacts/{}", urlencoding::encode(contact_id));
        self.client.http.get(&path).await
    }

    /// Assign a contact to one or more categories.
    pub async fn add_to_categories(&self, request: &AddToCategories) -> Result<Value, SdkError> {
        request.validate()?;
        self.client.http.post("/contacts/categories", request).await
    }
}
