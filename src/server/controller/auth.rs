use axum::{
    extract::{rejection::FormRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Form, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{CurrentUserDto, LoginDto, TokenDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::auth::LoginParam,
        service::auth::AuthService, state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with institutional credentials.
///
/// Verifies `zid` and `password` against the directory and returns a freshly
/// issued session token. The caller's session record is created on first login
/// and its stored token replaced once that token has expired.
///
/// # Returns
/// - `200 OK` - Session token
/// - `400 Bad Request` - Missing zid or password, or unreadable form
/// - `401 Unauthorized` - Directory rejected the credentials
/// - `503 Service Unavailable` - Directory unreachable or timed out
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/login/",
    tag = AUTH_TAG,
    request_body(content = LoginDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Session token issued", body = TokenDto),
        (status = 400, description = "Missing zid or password", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 503, description = "Directory unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    form: Result<Form<LoginDto>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(payload) = form?;

    let service = AuthService::new(&state.db, state.directory.as_ref(), &state.tokens);
    let outcome = service.login(LoginParam::from_dto(payload)).await?;

    Ok((
        StatusCode::OK,
        Json(TokenDto {
            token: outcome.token,
        }),
    ))
}

/// Get the currently authenticated user.
///
/// # Returns
/// - `200 OK` - Subject, display name and role of the bearer
/// - `401 Unauthorized` - Missing, invalid or expired token, or no session record
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authenticated user", body = CurrentUserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
