//! User account and token handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::Deserialize;
use validator::Validate;

use auth_service_lib::TokenResponse;
use common::AppResult;

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// User registration request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token request.
///
/// No rules beyond decoding: malformed credentials are simply wrong
/// credentials.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/generate_token", post(generate_token))
}

/// Register a new user; the new ID is returned in the `id` header
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, [(&'static str, String); 1])> {
    let user = state
        .user_service
        .register(&payload.name, &payload.email, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, [("id", user.id.to_string())]))
}

/// Exchange email and password for a bearer token
pub async fn generate_token(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(token))
}
