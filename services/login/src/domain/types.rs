use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Prefix of the sentinel written over a consumed code. Issued codes are short
/// numeric strings, so a sentinel can never match a future submission.
pub const CONSUMED_PREFIX: &str = "USED_";

/// Build the sentinel for a consumption happening at `now`. The timestamp
/// keeps sentinels distinct across logins on the same row.
pub fn consumed_sentinel(now: DateTime<Utc>) -> String {
    format!("{CONSUMED_PREFIX}{}", now.timestamp_millis())
}

/// One code-store row: the current login code (or consumed sentinel) for a
/// single phone number and its owning identity.
#[derive(Debug, Clone)]
pub struct LoginCode {
    pub id: Uuid,
    pub user_id: Uuid,
    pub phone: String,
    pub code: String,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl LoginCode {
    pub fn is_consumed(&self) -> bool {
        self.code.starts_with(CONSUMED_PREFIX)
    }
}

/// Login-relevant slice of an identity-provider user record.
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: Uuid,
    /// Sign-in address at the provider. Every phone-onboarded account gets
    /// one at provisioning time; session minting signs in with it.
    pub email: String,
}

/// Session minted by the identity provider. Both objects are opaque to this
/// service and passed through to the caller verbatim.
#[derive(Debug, Clone)]
pub struct MintedSession {
    pub session: serde_json::Value,
    pub user: serde_json::Value,
}
