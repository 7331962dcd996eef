//! Scenarios sub-client — trigger, list, custom-field lookup.

use serde_json::Value;

use crate::client::MailflowClient;
use crate::domain::scenario::TriggerScenario;
use crate::error::SdkError;
use crate::shared::{require_non_empty, Page};

pub struct Scenarios<'a> {
    pub(crate) client: &'a MailflowClient,
}

impl<'a> Scenarios<'a> {
    /// Start a scenario for a contact.
    pub async fn trigger(&self, request: &TriggerScenario) -> Result<Value, SdkError> {
        request.validate()?;
        self.client.http.post("/scenarios/trigger", request).await
    }

    /// Custom fields a scenario expects on its contacts.
    pub async fn custom_fields(&self, scenario_id: &str) -> Result<Value, SdkError> {
        require_non_empty("scenario", scenario_id)?;
        let path = format!(
            "/scenarios/custom-fields?scenario={}",
            urlencoding::encode(scenario_id)
        );
        self.client.http.get(&path).await
    }

    pub async fn list(&self, page: Page) -> Result<Value, SdkError> {
        page.validate()?;
        let path = format!("/scenarios?{}", page.query());
        self.client.http.get(&path).await
    }
}
