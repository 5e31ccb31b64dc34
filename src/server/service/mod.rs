//! Service layer for business logic and orchestration.
//!
//! This module sits between the controller (API) layer and the data (repository)
//! layer. Services work with domain models rather than DTOs or entity models,
//! coordinate repository calls with external collaborators such as the directory,
//! and turn "nothing matched" results into `AppError::NotFound`.

pub mod auth;
pub mod category;
pub mod post;
pub mod sponsor;
