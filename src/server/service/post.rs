use sea_orm::DatabaseConnection;

use crate::server::{
    data::post::PostRepository,
    error::AppError,
    model::post::{Post, PostParam},
};

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: PostParam) -> Result<Post, AppError> {
        let post = PostRepository::new(self.db).create(param).await?;

        tracing::debug!("Created post {}", post.id);

        Ok(post)
    }

    /// Gets a post by id; a category, when given, must match as well.
    pub async fn get(&self, id: i32, category: Option<i32>) -> Result<Option<Post>, AppError> {
        Ok(PostRepository::new(self.db).find_by_id(id, category).await?)
    }

    pub async fn list(&self, limit: u64, category: Option<i32>) -> Result<Vec<Post>, AppError> {
        Ok(PostRepository::new(self.db).list(limit, category).await?)
    }

    /// Replaces the editable fields of an existing post.
    ///
    /// # Returns
    /// - `Ok(())` - Post updated
    /// - `Err(AppError::NotFound)` - No post with that id
    pub async fn update(&self, param: PostParam) -> Result<(), AppError> {
        let id = param.id;

        if !PostRepository::new(self.db).update(param).await? {
            return Err(AppError::NotFound(format!("Post {} not found", id)));
        }

        Ok(())
    }

    /// # Returns
    /// - `Ok(())` - Post deleted
    /// - `Err(AppError::NotFound)` - No post with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !PostRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Post {} not found", id)));
        }

        Ok(())
    }
}
