use tracing::debug;
use uuid::Uuid;

use crate::domain::phone::PhoneCandidates;
use crate::domain::repository::{CodeDelivery, LoginCodeRepository};
use crate::error::LoginServiceError;

pub struct RequestLoginInput {
    pub phone: Option<String>,
}

#[derive(Debug)]
pub enum RequestLoginOutcome {
    /// A fresh code is on its way: the delivery collaborator accepted the
    /// dispatch and will overwrite the stored code itself.
    Dispatched { user_id: Uuid },
    /// No code-store row matched any phone variant — the number was never
    /// onboarded. A non-error outcome: the caller branches on it.
    Unknown,
}

pub struct RequestLoginUseCase<R, D>
where
    R: LoginCodeRepository,
    D: CodeDelivery,
{
    pub codes: R,
    pub delivery: D,
}

impl<R, D> RequestLoginUseCase<R, D>
where
    R: LoginCodeRepository,
    D: CodeDelivery,
{
    pub async fn execute(
        &self,
        input: RequestLoginInput,
    ) -> Result<RequestLoginOutcome, LoginServiceError> {
        let phone = input
            .phone
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or(LoginServiceError::MissingField("phone"))?;

        let candidates = PhoneCandidates::from_raw(phone);
        debug!(local = candidates.local(), "looking up login code row");

        // The code store doubles as the onboarded-user roster.
        let Some(row) = self.codes.find_by_phone(&candidates).await? else {
            return Ok(RequestLoginOutcome::Unknown);
        };

        // The collaborator generates the new code, writes it into the store,
        // and delivers it out-of-band. Nothing to persist on this side.
        self.delivery.dispatch(&candidates.e164(), row.user_id).await?;

        Ok(RequestLoginOutcome::Dispatched {
            user_id: row.user_id,
        })
    }
}
