use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header},
};
use serde::Deserialize;
use serde_json::json;

use crate::error::LoginServiceError;
use crate::state::AppState;
use crate::usecase::update_phone::{UpdatePhoneInput, UpdatePhoneUseCase};

#[derive(Deserialize)]
pub struct UpdatePhoneBody {
    pub phone: Option<String>,
    pub full_name: Option<String>,
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_owned)
}

/// `PATCH /login/phone` — authenticated phone change: updates the identity
/// provider record and repoints the caller's login-code row.
pub async fn update_phone(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<UpdatePhoneBody>,
) -> Result<Json<serde_json::Value>, LoginServiceError> {
    let usecase = UpdatePhoneUseCase {
        codes: state.login_code_repo(),
        identity: state.identity_provider(),
    };

    usecase
        .execute(UpdatePhoneInput {
            bearer: bearer_token(&headers),
            phone: body.phone,
            full_name: body.full_name,
        })
        .await?;

    Ok(Json(json!({ "success": true })))
}
