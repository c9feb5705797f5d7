//! Registration and the basic-auth check.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{AuthUser, ValidJson};
use crate::models::{RegisterRequest, UsernameResponse};
use crate::service::UserService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// POST /api/v1/register: create a user, no body on success.
#[utoipa::path(
    post,
    path = "/api/v1/register",
    tag = "users",
    request_body = RegisterRequest,
    responses(
        (status = 204, description = "User registered"),
        (status = 400, description = "Email already registered", body = ErrorBody),
        (status = 422, description = "Malformed body", body = ErrorBody),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<RegisterRequest>,
) -> Result<StatusCode, AppError> {
    UserService::register(&state.pool, &body).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/__user__: echo the authenticated identity.
#[utoipa::path(
    get,
    path = "/api/v1/__user__",
    tag = "users",
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "Credentials accepted", body = UsernameResponse),
        (status = 401, description = "Incorrect email or password", body = ErrorBody),
    )
)]
pub async fn current_user(AuthUser(user): AuthUser) -> Json<UsernameResponse> {
    Json(UsernameResponse { username: user.email })
}
