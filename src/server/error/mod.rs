//! Errors raised by handlers and startup, and their JSON responses.
//!
//! Every failure is scoped to the request that produced it; the body is always
//! `{"error": "..."}`.

pub mod auth;
pub mod config;
pub mod directory;

use axum::{
    extract::rejection::{FormRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Error returned from every handler, service and repository call.
#[derive(Error, Debug)]
pub enum AppError {
    /// Bad or missing environment at startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error from the login flow or bearer-token checks.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Record store operation error from SeaORM.
    ///
    /// Unique-constraint violations map to 409 Conflict; everything else results
    /// in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Token signing error.
    ///
    /// Results in 500 Internal Server Error; signing only fails on a broken key.
    #[error(transparent)]
    TokenErr(#[from] jsonwebtoken::errors::Error),

    /// Socket or listener error while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Form body could not be read (wrong content type or undecodable body).
    #[error(transparent)]
    FormRejection(#[from] FormRejection),

    /// Query string could not be decoded.
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),

    /// Update or delete matched no record. 404 with the message.
    #[error("{0}")]
    NotFound(String),

    /// Form field missing or malformed. 400 with the message.
    #[error("{0}")]
    BadRequest(String),
}

/// Status mapping:
/// - 400 Bad Request - For `BadRequest` and extractor rejections
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `DbErr` unique-constraint violations
/// - 500 Internal Server Error - For all other error types
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::FormRejection(rejection) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: rejection.body_text(),
                }),
            )
                .into_response(),
            Self::QueryRejection(rejection) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: rejection.body_text(),
                }),
            )
                .into_response(),
            Self::DbErr(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                tracing::debug!("Unique constraint violation: {}", err);
                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: "A record with this id already exists".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// 500 response for any displayable error. The detail is logged, never returned.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
