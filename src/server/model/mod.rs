//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types validate
//! submitted form fields before they reach the service layer.

pub mod auth;
pub mod category;
pub mod post;
pub mod sponsor;
pub mod user;
