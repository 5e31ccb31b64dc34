use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Utc;
use entity::prelude::User;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    model::user::Role,
    token::TokenIssuer,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn issuer() -> TokenIssuer {
    TokenIssuer::new(b"guard-test-secret", chrono::Duration::hours(24))
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
