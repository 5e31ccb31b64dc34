use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::sponsor::SponsorRepository,
    error::AppError,
    model::sponsor::{CreateSponsorParam, Sponsor},
};

pub struct SponsorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SponsorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateSponsorParam) -> Result<Sponsor, AppError> {
        let sponsor = SponsorRepository::new(self.db).create(param).await?;

        tracing::debug!("Registered sponsor {}", sponsor.id);

        Ok(sponsor)
    }

    pub async fn list(&self, limit: u64) -> Result<Vec<Sponsor>, AppError> {
        Ok(SponsorRepository::new(self.db).list(limit).await?)
    }

    /// # Returns
    /// - `Ok(())` - Sponsor deleted
    /// - `Err(AppError::NotFound)` - No sponsor with that id
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !SponsorRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Sponsor {} not found", id)));
        }

        Ok(())
    }
}
