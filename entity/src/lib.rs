//! SeaORM entities for the content-management record store.

pub mod prelude;

pub mod category;
pub mod post;
pub mod sponsor;
pub mod user;
