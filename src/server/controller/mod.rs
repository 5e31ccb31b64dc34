//! HTTP request handlers.
//!
//! Controllers extract request data, convert DTOs into parameter types, call the
//! service layer and convert domain models back into response DTOs. Errors are
//! returned as `AppError` and rendered by its `IntoResponse` implementation.

pub mod auth;
pub mod category;
pub mod health;
pub mod post;
pub mod sponsor;

#[cfg(test)]
mod test;
