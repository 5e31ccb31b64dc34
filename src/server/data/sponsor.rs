use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

use crate::server::model::sponsor::{CreateSponsorParam, Sponsor};

pub struct SponsorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SponsorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a sponsor under a freshly generated v4 UUID.
    pub async fn create(&self, param: CreateSponsorParam) -> Result<Sponsor, DbErr> {
        let entity = entity::sponsor::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(param.name),
            logo: ActiveValue::Set(param.logo),
            tier: ActiveValue::Set(param.tier),
            expiry: ActiveValue::Set(param.expiry),
        }
        .insert(self.db)
        .await?;

        Ok(Sponsor::from_entity(entity))
    }

    /// Lists up to `limit` sponsors, soonest expiry first.
    pub async fn list(&self, limit: u64) -> Result<Vec<Sponsor>, DbErr> {
        let entities = entity::prelude::Sponsor::find()
            .order_by_asc(entity::sponsor::Column::Expiry)
            .order_by_asc(entity::sponsor::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Sponsor::from_entity).collect())
    }

    /// Deletes a sponsor by id.
    ///
    /// # Returns
    /// - `Ok(true)` - Sponsor deleted
    /// - `Ok(false)` - No sponsor with that id
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Sponsor::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
