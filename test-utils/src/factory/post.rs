//! Post factory for creating test post entities.

use crate::factory::helpers::next_record_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test posts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::post::PostFactory;
///
/// let post = PostFactory::new(&db)
///     .id(7)
///     .category(2)
///     .title("Welcome Week")
///     .build()
///     .await?;
/// ```
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    id: i32,
    title: String,
    category: i32,
    show_in_menu: bool,
}

impl<'a> PostFactory<'a> {
    /// Creates a new PostFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented
    /// - title: `"Post {id}"`
    /// - category: `1`
    /// - show_in_menu: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_record_id();
        Self {
            db,
            id,
            title: format!("Post {}", id),
            category: 1,
            show_in_menu: false,
        }
    }

    /// Sets the post id.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the post title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the category id the post belongs to.
    pub fn category(mut self, category: i32) -> Self {
        self.category = category;
        self
    }

    /// Sets whether the post is linked from the site menu.
    pub fn show_in_menu(mut self, show_in_menu: bool) -> Self {
        self.show_in_menu = show_in_menu;
        self
    }

    /// Builds and inserts the post entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::post::Model)` - Created post entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        let now = Utc::now();
        entity::post::ActiveModel {
            id: ActiveValue::Set(self.id),
            title: ActiveValue::Set(self.title),
            subtitle: ActiveValue::Set(String::new()),
            post_type: ActiveValue::Set("article".to_string()),
            category: ActiveValue::Set(self.category),
            created_on: ActiveValue::Set(now),
            last_edited_on: ActiveValue::Set(now),
            content: ActiveValue::Set("Lorem ipsum".to_string()),
            link_github: ActiveValue::Set(String::new()),
            link_facebook: ActiveValue::Set(String::new()),
            show_in_menu: ActiveValue::Set(self.show_in_menu),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a post with default values.
pub async fn create_post(db: &DatabaseConnection) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db).build().await
}
