use shared_types::{
    ApiConfig, AppError, ContactRequest, Judgment, JudgmentLookupRequest, JudgmentLookupResponse,
};
use std::time::Duration;

use crate::http::ApiClient;

const LOOKUP_PATH: &str = "/judgments/lookup";
const CONTACT_PATH: &str = "/contact";

/// Client for the legal-content service.
#[derive(Debug, Clone)]
pub struct ContentClient {
    api: ApiClient,
}

impl ContentClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            api: ApiClient::new(base_url, timeout),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(
            config.content_base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Fetch one judgment by id. No caching: every call hits the service.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_judgment(&self, id: i64) -> Result<Judgment, AppError> {
        let request = JudgmentLookupRequest::for_id(id);
        let response: JudgmentLookupResponse = self.api.post_json(LOOKUP_PATH, &request).await?;
        let judgment = response.into_judgment()?;
        tracing::info!(id = judgment.id, "judgment loaded");
        Ok(judgment)
    }

    /// Send a contact-form message. The reply body is ignored.
    #[tracing::instrument(skip(self, request), fields(topic = %request.topic))]
    pub async fn submit_contact(&self, request: &ContactRequest) -> Result<(), AppError> {
        let _: serde_json::Value = self.api.post_json(CONTACT_PATH, request).await?;
        tracing::info!("contact message sent");
        Ok(())
    }
}
