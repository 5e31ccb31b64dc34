use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::post::{Post, PostParam};

pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a post with both timestamps set to now.
    ///
    /// # Returns
    /// - `Ok(Post)` - The stored post
    /// - `Err(DbErr)` - Database error, including a duplicate id
    pub async fn create(&self, param: PostParam) -> Result<Post, DbErr> {
        let now = Utc::now();

        let entity = entity::post::ActiveModel {
            id: ActiveValue::Set(param.id),
            title: ActiveValue::Set(param.title),
            subtitle: ActiveValue::Set(param.subtitle),
            post_type: ActiveValue::Set(param.post_type),
            category: ActiveValue::Set(param.category),
            created_on: ActiveValue::Set(now),
            last_edited_on: ActiveValue::Set(now),
            content: ActiveValue::Set(param.content),
            link_github: ActiveValue::Set(param.link_github),
            link_facebook: ActiveValue::Set(param.link_facebook),
            show_in_menu: ActiveValue::Set(param.show_in_menu),
        }
        .insert(self.db)
        .await?;

        Ok(Post::from_entity(entity))
    }

    /// Gets a post by id, optionally requiring it to belong to `category`.
    pub async fn find_by_id(&self, id: i32, category: Option<i32>) -> Result<Option<Post>, DbErr> {
        let mut query = entity::prelude::Post::find_by_id(id);
        if let Some(category) = category {
            query = query.filter(entity::post::Column::Category.eq(category));
        }

        Ok(query.one(self.db).await?.map(Post::from_entity))
    }

    /// Lists up to `limit` posts in id order, optionally within one category.
    pub async fn list(&self, limit: u64, category: Option<i32>) -> Result<Vec<Post>, DbErr> {
        let mut query = entity::prelude::Post::find();
        if let Some(category) = category {
            query = query.filter(entity::post::Column::Category.eq(category));
        }

        let entities = query
            .order_by_asc(entity::post::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Post::from_entity).collect())
    }

    /// Replaces the editable fields of the post with `param.id`.
    ///
    /// `created_on` is left untouched and `last_edited_on` is set to now.
    ///
    /// # Returns
    /// - `Ok(true)` - Post updated
    /// - `Ok(false)` - No post with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: PostParam) -> Result<bool, DbErr> {
        let result = entity::prelude::Post::update_many()
            .set(entity::post::ActiveModel {
                title: ActiveValue::Set(param.title),
                subtitle: ActiveValue::Set(param.subtitle),
                post_type: ActiveValue::Set(param.post_type),
                category: ActiveValue::Set(param.category),
                last_edited_on: ActiveValue::Set(Utc::now()),
                content: ActiveValue::Set(param.content),
                link_github: ActiveValue::Set(param.link_github),
                link_facebook: ActiveValue::Set(param.link_facebook),
                show_in_menu: ActiveValue::Set(param.show_in_menu),
                ..Default::default()
            })
            .filter(entity::post::Column::Id.eq(param.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a post by id.
    ///
    /// # Returns
    /// - `Ok(true)` - Post deleted
    /// - `Ok(false)` - No post with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Post::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
