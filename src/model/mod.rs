//! Wire-level DTOs shared by the HTTP layer and API documentation.
//!
//! Form DTOs keep every field as text so malformed values surface as
//! `400 Bad Request` responses with a JSON body instead of extractor rejections.

pub mod api;
pub mod auth;
pub mod category;
pub mod post;
pub mod sponsor;
