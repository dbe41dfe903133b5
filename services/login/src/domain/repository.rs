#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::phone::PhoneCandidates;
use crate::domain::types::{Identity, LoginCode, MintedSession};
use crate::error::LoginServiceError;

/// Row-per-phone store holding the current login code for each onboarded user.
pub trait LoginCodeRepository: Send + Sync {
    /// Find the row whose stored phone equals any normalization candidate.
    async fn find_by_phone(
        &self,
        phone: &PhoneCandidates,
    ) -> Result<Option<LoginCode>, LoginServiceError>;

    /// Atomically overwrite a matching `(phone, code)` row's code with the
    /// consumed sentinel, in one conditional update. Returns the consumed row,
    /// or `None` when nothing matched — wrong code, already consumed, and
    /// unknown phone are indistinguishable by design.
    async fn consume(
        &self,
        phone: &PhoneCandidates,
        code: &str,
        sentinel: &str,
    ) -> Result<Option<LoginCode>, LoginServiceError>;

    /// Point a user's row(s) at a new phone number, keeping the store in sync
    /// after an account-level phone change. Returns the affected row count.
    async fn reassign_phone(&self, user_id: Uuid, phone: &str) -> Result<u64, LoginServiceError>;
}

/// External identity provider: owns user records, credentials, and sessions.
pub trait IdentityProvider: Send + Sync {
    async fn get_user(&self, user_id: Uuid) -> Result<Option<Identity>, LoginServiceError>;

    /// Mint a session for the identity. How the provider gets there (this one
    /// lacks a direct "issue session for user X" primitive) is the
    /// implementation's business.
    async fn mint_session(&self, user: &Identity) -> Result<MintedSession, LoginServiceError>;

    /// Resolve the identity behind a caller-supplied bearer token.
    async fn user_from_token(&self, bearer: &str) -> Result<Option<Identity>, LoginServiceError>;

    /// Overwrite the identity's phone (marked confirmed) and, optionally, its
    /// display name.
    async fn update_account(
        &self,
        user_id: Uuid,
        phone: &str,
        full_name: Option<&str>,
    ) -> Result<(), LoginServiceError>;
}

/// Message-dispatch webhook. The collaborator generates the fresh code, writes
/// it into the code store itself, and delivers it to the user out-of-band.
pub trait CodeDelivery: Send + Sync {
    async fn dispatch(&self, phone: &str, user_id: Uuid) -> Result<(), LoginServiceError>;
}
