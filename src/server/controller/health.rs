use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::ErrorDto;

/// Tag for grouping service endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness check.
#[utoipa::path(
    get,
    path = "/api/v1/test",
    tag = HEALTH_TAG,
    responses((status = 200, description = "Service is up", body = String, content_type = "text/plain")),
)]
pub async fn hello() -> &'static str {
    "Hello, World!"
}

/// Fallback for unmatched routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "Not found".to_string(),
        }),
    )
}
