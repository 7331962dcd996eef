//! Scenario domain — triggering automated flows for a contact.

pub mod client;

use serde::Serialize;

use crate::error::SdkError;
use crate::shared::{require_non_empty, ContactRef};

/// Request body for `POST /scenarios/trigger`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriggerScenario {
    #[serde(rename = "scenario")]
    pub scenario_id: String,
    #[serde(flatten)]
    pub contact: ContactRef,
}

impl TriggerScenario {
    pub fn new(scenario_id: impl Into<String>, contact: ContactRef) -> Self {
        Self {
            scenario_id: scenario_id.into(),
            contact,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), SdkError> {
        require_non_empty("scenario", &self.scenario_id)?;
        self.contact.validate()
    }
}
