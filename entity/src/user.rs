//! Session record: one row per authenticated institutional identity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    /// Lowercase hex SHA-256 of the institutional identifier.
    #[sea_orm(primary_key, auto_increment = false)]
    pub subject: String,
    /// Most recently stored session token.
    pub token: String,
    pub role: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
