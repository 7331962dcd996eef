//! Categories sub-client.

use serde_json::Value;

use crate::client::MailflowClient;
use crate::error::SdkError;
use crate::shared::Page;

pub struct Categories<'a> {
    pub(crate) client: &'a MailflowClient,
}

impl<'a> Categories<'a> {
    pub async fn list(&self, page: Page) -> Result<Value, SdkError> {
        page.validate()?;
        let path = format!("/categories?{}", page.query());
        self.client.http.get(&path).await
    }
}
