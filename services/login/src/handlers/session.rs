use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::LoginServiceError;
use crate::state::AppState;
use crate::usecase::verify_code::{VerifyLoginInput, VerifyLoginUseCase};

#[derive(Deserialize)]
pub struct VerifyLoginBody {
    pub phone: Option<String>,
    pub code: Option<String>,
}

#[derive(Serialize)]
pub struct VerifyLoginResponse {
    /// Session object from the identity provider, passed through verbatim.
    pub session: serde_json::Value,
    pub user: serde_json::Value,
}

/// `POST /login/session` — verify a `(phone, code)` pair, consume the code,
/// and mint a session for the owning identity.
pub async fn create_session(
    State(state): State<AppState>,
    Json(body): Json<VerifyLoginBody>,
) -> Result<Json<VerifyLoginResponse>, LoginServiceError> {
    let usecase = VerifyLoginUseCase {
        codes: state.login_code_repo(),
        identity: state.identity_provider(),
    };

    let out = usecase
        .execute(VerifyLoginInput {
            phone: body.phone,
            code: body.code,
        })
        .await?;

    Ok(Json(VerifyLoginResponse {
        session: out.session,
        user: out.user,
    }))
}
