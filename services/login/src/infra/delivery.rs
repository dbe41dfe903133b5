use tracing::error;
use uuid::Uuid;

use crate::domain::repository::CodeDelivery;
use crate::error::LoginServiceError;

/// Message-dispatch webhook client. The webhook generates the fresh code,
/// writes it into the code store, and delivers it over the messaging channel.
#[derive(Clone)]
pub struct WebhookCodeDelivery {
    http: reqwest::Client,
    webhook_url: String,
}

impl WebhookCodeDelivery {
    pub fn new(http: reqwest::Client, webhook_url: String) -> Self {
        Self { http, webhook_url }
    }
}

impl CodeDelivery for WebhookCodeDelivery {
    async fn dispatch(&self, phone: &str, user_id: Uuid) -> Result<(), LoginServiceError> {
        let response = self
            .http
            .post(&self.webhook_url)
            .json(&serde_json::json!({ "phone": phone, "user_id": user_id }))
            .send()
            .await
            .map_err(|e| LoginServiceError::Delivery(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(%status, %body, "delivery webhook rejected dispatch");
            return Err(LoginServiceError::Delivery(format!(
                "delivery provider responded with status {status}"
            )));
        }
        Ok(())
    }
}
