use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::category::{Category, CategoryParam};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a category with its client-supplied id.
    pub async fn create(&self, param: CategoryParam) -> Result<Category, DbErr> {
        let entity = entity::category::ActiveModel {
            id: ActiveValue::Set(param.id),
            name: ActiveValue::Set(param.name),
            sort_index: ActiveValue::Set(param.index),
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Lists up to `limit` categories in id order.
    pub async fn list(&self, limit: u64) -> Result<Vec<Category>, DbErr> {
        let entities = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Category::from_entity).collect())
    }

    /// Overwrites name and index of the category with `param.id`.
    ///
    /// # Returns
    /// - `Ok(true)` - Category updated
    /// - `Ok(false)` - No category with that id
    pub async fn update(&self, param: CategoryParam) -> Result<bool, DbErr> {
        let result = entity::prelude::Category::update_many()
            .set(entity::category::ActiveModel {
                name: ActiveValue::Set(param.name),
                sort_index: ActiveValue::Set(param.index),
                ..Default::default()
            })
            .filter(entity::category::Column::Id.eq(param.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a category by id. Posts referencing it are left as they are.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
