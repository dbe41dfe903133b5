use tracing::debug;

use crate::domain::phone::PhoneCandidates;
use crate::domain::repository::{IdentityProvider, LoginCodeRepository};
use crate::error::LoginServiceError;

pub struct UpdatePhoneInput {
    pub bearer: Option<String>,
    pub phone: Option<String>,
    pub full_name: Option<String>,
}

pub struct UpdatePhoneUseCase<R, I>
where
    R: LoginCodeRepository,
    I: IdentityProvider,
{
    pub codes: R,
    pub identity: I,
}

impl<R, I> UpdatePhoneUseCase<R, I>
where
    R: LoginCodeRepository,
    I: IdentityProvider,
{
    /// Change the caller's phone number everywhere it matters: the identity
    /// provider record and the login-code row. Skipping the second write would
    /// strand the account on its old number for phone login.
    pub async fn execute(&self, input: UpdatePhoneInput) -> Result<(), LoginServiceError> {
        let bearer = input.bearer.ok_or(LoginServiceError::Unauthorized)?;
        let caller = self
            .identity
            .user_from_token(&bearer)
            .await?
            .ok_or(LoginServiceError::Unauthorized)?;

        let phone = input
            .phone
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or(LoginServiceError::MissingField("phone"))?;

        // Stored going forward in canonical +55 form; lookups keep matching
        // legacy formats through the candidate set.
        let e164 = PhoneCandidates::from_raw(phone).e164();

        self.identity
            .update_account(caller.id, &e164, input.full_name.as_deref())
            .await?;

        let rows = self.codes.reassign_phone(caller.id, &e164).await?;
        debug!(user_id = %caller.id, rows, "login code rows repointed to new phone");

        Ok(())
    }
}
