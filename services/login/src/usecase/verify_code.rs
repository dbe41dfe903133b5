use chrono::Utc;

use crate::domain::phone::PhoneCandidates;
use crate::domain::repository::{IdentityProvider, LoginCodeRepository};
use crate::domain::types::{CONSUMED_PREFIX, consumed_sentinel};
use crate::error::LoginServiceError;

pub struct VerifyLoginInput {
    pub phone: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug)]
pub struct VerifyLoginOutput {
    pub session: serde_json::Value,
    pub user: serde_json::Value,
}

pub struct VerifyLoginUseCase<R, I>
where
    R: LoginCodeRepository,
    I: IdentityProvider,
{
    pub codes: R,
    pub identity: I,
}

impl<R, I> VerifyLoginUseCase<R, I>
where
    R: LoginCodeRepository,
    I: IdentityProvider,
{
    pub async fn execute(
        &self,
        input: VerifyLoginInput,
    ) -> Result<VerifyLoginOutput, LoginServiceError> {
        let phone = input
            .phone
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or(LoginServiceError::MissingField("phone"))?;
        let code = input
            .code
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or(LoginServiceError::MissingField("code"))?;

        // A sentinel is never a valid submission; without this check a caller
        // who saw a consumed row could replay its stored value.
        if code.starts_with(CONSUMED_PREFIX) {
            return Err(LoginServiceError::InvalidCode);
        }

        let candidates = PhoneCandidates::from_raw(phone);

        // Consume before minting: the overwrite and the match happen in one
        // conditional update, so a code verifies at most once even under
        // concurrent attempts. If minting then fails the code is burned and
        // the user requests a fresh one.
        let sentinel = consumed_sentinel(Utc::now());
        let row = self
            .codes
            .consume(&candidates, code, &sentinel)
            .await?
            .ok_or(LoginServiceError::InvalidCode)?;

        if row.user_id.is_nil() {
            return Err(LoginServiceError::OrphanCode);
        }
        let user = self
            .identity
            .get_user(row.user_id)
            .await?
            .ok_or(LoginServiceError::OrphanCode)?;

        let minted = self.identity.mint_session(&user).await?;

        Ok(VerifyLoginOutput {
            session: minted.session,
            user: minted.user,
        })
    }
}
