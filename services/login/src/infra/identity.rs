use rand::RngExt;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::domain::repository::IdentityProvider;
use crate::domain::types::{Identity, MintedSession};
use crate::error::LoginServiceError;

/// Charset for throwaway sign-in credentials (alphanumeric).
const SECRET_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Throwaway credential length in characters.
const SECRET_LEN: usize = 32;

fn generate_secret() -> String {
    let mut rng = rand::rng();
    (0..SECRET_LEN)
        .map(|_| SECRET_CHARSET[rng.random_range(0..SECRET_CHARSET.len())] as char)
        .collect()
}

/// Identity provider client over its HTTP admin API.
///
/// Admin endpoints authenticate with the service-role key; the sign-in
/// endpoint runs under the public (anon) key, as if the user themself called.
#[derive(Clone)]
pub struct HttpIdentityProvider {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
    anon_key: String,
}

/// Slice of the provider's user payload this service reads.
#[derive(Deserialize)]
struct UserPayload {
    id: Uuid,
    email: Option<String>,
}

impl HttpIdentityProvider {
    pub fn new(
        http: reqwest::Client,
        base_url: String,
        service_key: String,
        anon_key: String,
    ) -> Self {
        Self {
            http,
            base_url,
            service_key,
            anon_key,
        }
    }

    fn identity_from_payload(payload: UserPayload) -> Result<Identity, LoginServiceError> {
        // Phone-onboarded accounts are provisioned with an email; an account
        // without one cannot complete the sign-in step.
        let email = payload
            .email
            .filter(|e| !e.is_empty())
            .ok_or_else(|| LoginServiceError::Session("account has no sign-in email".to_owned()))?;
        Ok(Identity {
            id: payload.id,
            email,
        })
    }
}

impl IdentityProvider for HttpIdentityProvider {
    async fn get_user(&self, user_id: Uuid) -> Result<Option<Identity>, LoginServiceError> {
        let response = self
            .http
            .get(format!("{}/admin/users/{user_id}", self.base_url))
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("identity lookup failed: {e}"))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(
                anyhow::anyhow!("identity lookup failed with status {}", response.status()).into(),
            );
        }
        let payload: UserPayload = response
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("invalid identity payload: {e}"))?;
        Ok(Some(Self::identity_from_payload(payload)?))
    }

    async fn mint_session(&self, user: &Identity) -> Result<MintedSession, LoginServiceError> {
        // The provider exposes no "issue session for user X" primitive, so:
        // set a throwaway password on the account, then sign in with it.
        let secret = generate_secret();

        let response = self
            .http
            .put(format!("{}/admin/users/{}", self.base_url, user.id))
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .json(&json!({ "password": secret }))
            .send()
            .await
            .map_err(|e| LoginServiceError::Session(format!("credential reset failed: {e}")))?;
        if !response.status().is_success() {
            return Err(LoginServiceError::Session(format!(
                "credential reset failed with status {}",
                response.status()
            )));
        }

        let response = self
            .http
            .post(format!("{}/token?grant_type=password", self.base_url))
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": user.email, "password": secret }))
            .send()
            .await
            .map_err(|e| LoginServiceError::Session(format!("sign-in failed: {e}")))?;
        if !response.status().is_success() {
            return Err(LoginServiceError::Session(format!(
                "sign-in failed with status {}",
                response.status()
            )));
        }

        let session: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LoginServiceError::Session(format!("invalid session payload: {e}")))?;
        let user_object = session
            .get("user")
            .cloned()
            .unwrap_or(serde_json::Value::Null);

        Ok(MintedSession {
            session,
            user: user_object,
        })
    }

    async fn user_from_token(
        &self,
        bearer: &str,
    ) -> Result<Option<Identity>, LoginServiceError> {
        let response = self
            .http
            .get(format!("{}/user", self.base_url))
            .bearer_auth(bearer)
            .header("apikey", &self.anon_key)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("token introspection failed: {e}"))?;

        // Expired or forged tokens come back 401/403/404 depending on the
        // provider version; all mean "no identity behind this token".
        if response.status().is_client_error() {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "token introspection failed with status {}",
                response.status()
            )
            .into());
        }
        let payload: UserPayload = response
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("invalid identity payload: {e}"))?;
        Ok(Some(Self::identity_from_payload(payload)?))
    }

    async fn update_account(
        &self,
        user_id: Uuid,
        phone: &str,
        full_name: Option<&str>,
    ) -> Result<(), LoginServiceError> {
        let mut body = json!({ "phone": phone, "phone_confirm": true });
        if let Some(name) = full_name {
            body["user_metadata"] = json!({ "full_name": name });
        }

        let response = self
            .http
            .put(format!("{}/admin/users/{user_id}", self.base_url))
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("account update failed: {e}"))?;
        if !response.status().is_success() {
            return Err(
                anyhow::anyhow!("account update failed with status {}", response.status()).into(),
            );
        }
        Ok(())
    }
}
