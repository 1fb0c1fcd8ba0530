// src/api/http/auth.rs
// Sign-in pass-through. Claims are stored as sent; nothing is verified.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::{SignInRequest, SignInResponse, UsersResponse};
use crate::state::AppState;

const NO_USER: &str = "No user data provided";

/// POST /api/auth/google
pub async fn sign_in_handler(
    State(state): State<AppState>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> ApiResult<Json<SignInResponse>> {
    let claims = payload
        .ok()
        .and_then(|Json(request)| request.user)
        .filter(|claims| !claims.is_empty())
        .ok_or_else(|| ApiError::bad_request(NO_USER))?;

    let user = state.users.upsert(claims).await;
    info!("User signed in: {} <{}>", user.name, user.email);

    Ok(Json(SignInResponse {
        status: "ok",
        message: format!("Welcome, {}!", user.name),
        user,
    }))
}

/// GET /api/auth/users
pub async fn list_users_handler(State(state): State<AppState>) -> Json<UsersResponse> {
    let users = state.users.list().await;
    Json(UsersResponse {
        count: users.len(),
        users,
    })
}
