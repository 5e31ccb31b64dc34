//! Sponsor factory for creating test sponsor entities.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test sponsors with customizable fields.
pub struct SponsorFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    tier: String,
    expiry: i64,
}

impl<'a> SponsorFactory<'a> {
    /// Creates a new SponsorFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Sponsor {id}"`
    /// - tier: `"gold"`
    /// - expiry: one year from now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Sponsor {}", id),
            tier: "gold".to_string(),
            expiry: (Utc::now() + Duration::days(365)).timestamp(),
        }
    }

    /// Sets the sponsor name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the sponsorship tier.
    pub fn tier(mut self, tier: impl Into<String>) -> Self {
        self.tier = tier.into();
        self
    }

    /// Sets the expiry as a unix timestamp.
    pub fn expiry(mut self, expiry: i64) -> Self {
        self.expiry = expiry;
        self
    }

    /// Builds and inserts the sponsor entity with a fresh UUID.
    pub async fn build(self) -> Result<entity::sponsor::Model, DbErr> {
        entity::sponsor::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            logo: ActiveValue::Set("https://example.com/logo.png".to_string()),
            tier: ActiveValue::Set(self.tier),
            expiry: ActiveValue::Set(self.expiry),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a sponsor with default values.
pub async fn create_sponsor(db: &DatabaseConnection) -> Result<entity::sponsor::Model, DbErr> {
    SponsorFactory::new(db).build().await
}
