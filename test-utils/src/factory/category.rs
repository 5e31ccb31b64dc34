//! Category factory for creating test category entities.

use crate::factory::helpers::next_record_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test categories with customizable fields.
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::category::Model,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented
    /// - name: `"Category {id}"`
    /// - sort_index: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_record_id();
        Self {
            db,
            entity: entity::category::Model {
                id,
                name: format!("Category {}", id),
                sort_index: 0,
            },
        }
    }

    /// Sets the category id.
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    /// Sets the category name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the menu position of the category.
    pub fn index(mut self, index: i32) -> Self {
        self.entity.sort_index = index;
        self
    }

    /// Builds and inserts the category entity into the database.
    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            name: ActiveValue::Set(self.entity.name),
            sort_index: ActiveValue::Set(self.entity.sort_index),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with default values.
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}
