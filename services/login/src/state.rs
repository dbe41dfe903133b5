use sea_orm::DatabaseConnection;

use crate::infra::db::DbLoginCodeRepository;
use crate::infra::delivery::WebhookCodeDelivery;
use crate::infra::identity::HttpIdentityProvider;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub http: reqwest::Client,
    pub identity_url: String,
    pub identity_service_key: String,
    pub identity_anon_key: String,
    pub delivery_webhook_url: String,
}

impl AppState {
    pub fn login_code_repo(&self) -> DbLoginCodeRepository {
        DbLoginCodeRepository {
            db: self.db.clone(),
        }
    }

    pub fn identity_provider(&self) -> HttpIdentityProvider {
        HttpIdentityProvider::new(
            self.http.clone(),
            self.identity_url.clone(),
            self.identity_service_key.clone(),
            self.identity_anon_key.clone(),
        )
    }

    pub fn code_delivery(&self) -> WebhookCodeDelivery {
        WebhookCodeDelivery::new(self.http.clone(), self.delivery_webhook_url.clone())
    }
}
