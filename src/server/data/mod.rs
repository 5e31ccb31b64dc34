//! Database repository layer.
//!
//! This module contains repository structs that handle database operations for each
//! record type. Repositories use SeaORM entity models internally and return domain
//! models so the service layer never sees entity types.

pub mod category;
pub mod post;
pub mod sponsor;
pub mod user;

#[cfg(test)]
mod test;
