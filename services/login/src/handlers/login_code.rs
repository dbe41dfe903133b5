use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::json;

use crate::error::LoginServiceError;
use crate::state::AppState;
use crate::usecase::request_code::{RequestLoginInput, RequestLoginOutcome, RequestLoginUseCase};

#[derive(Deserialize)]
pub struct RequestLoginBody {
    // Optional so an absent field produces this service's error envelope
    // instead of an extractor rejection.
    pub phone: Option<String>,
}

/// `POST /login/code` — look up the submitted phone and trigger delivery of a
/// fresh login code. An unrecognized phone is a 200 with `not_found`, not an
/// error — the frontend routes those users to onboarding.
pub async fn request_login_code(
    State(state): State<AppState>,
    Json(body): Json<RequestLoginBody>,
) -> Result<Json<serde_json::Value>, LoginServiceError> {
    let usecase = RequestLoginUseCase {
        codes: state.login_code_repo(),
        delivery: state.code_delivery(),
    };

    match usecase
        .execute(RequestLoginInput { phone: body.phone })
        .await?
    {
        RequestLoginOutcome::Dispatched { user_id } => {
            Ok(Json(json!({ "success": true, "user_id": user_id })))
        }
        RequestLoginOutcome::Unknown => Ok(Json(json!({
            "error": "account not found or onboarding incomplete",
            "not_found": true,
        }))),
    }
}
