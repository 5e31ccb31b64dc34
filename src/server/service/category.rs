use sea_orm::DatabaseConnection;

use crate::server::{
    data::category::CategoryRepository,
    error::AppError,
    model::category::{Category, CategoryParam},
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CategoryParam) -> Result<Category, AppError> {
        Ok(CategoryRepository::new(self.db).create(param).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Option<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn list(&self, limit: u64) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).list(limit).await?)
    }

    /// Overwrites name and index of an existing category.
    ///
    /// # Returns
    /// - `Ok(())` - Category updated
    /// - `Err(AppError::NotFound)` - No category with that id
    pub async fn update(&self, param: CategoryParam) -> Result<(), AppError> {
        let id = param.id;

        if !CategoryRepository::new(self.db).update(param).await? {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CategoryRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }

        Ok(())
    }
}
