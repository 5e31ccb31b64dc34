//! Post domain models and parameters.
//!
//! Posts carry a client-chosen numeric id and belong to a category by id. The
//! creation and last-edit timestamps are maintained by the server.

use chrono::{DateTime, Utc};

use crate::{
    model::post::{PostDto, PostFormDto},
    server::{
        error::AppError,
        util::parse::{parse_bool, parse_optional_i32, parse_required_i32},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub post_type: String,
    pub category: i32,
    pub created_on: DateTime<Utc>,
    pub last_edited_on: DateTime<Utc>,
    pub content: String,
    pub link_github: String,
    pub link_facebook: String,
    pub show_in_menu: bool,
}

impl Post {
    pub fn from_entity(entity: entity::post::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            subtitle: entity.subtitle,
            post_type: entity.post_type,
            category: entity.category,
            created_on: entity.created_on,
            last_edited_on: entity.last_edited_on,
            content: entity.content,
            link_github: entity.link_github,
            link_facebook: entity.link_facebook,
            show_in_menu: entity.show_in_menu,
        }
    }

    pub fn into_dto(self) -> PostDto {
        PostDto {
            id: self.id,
            title: self.title,
            subtitle: self.subtitle,
            post_type: self.post_type,
            category: self.category,
            created_on: self.created_on,
            last_edited_on: self.last_edited_on,
            content: self.content,
            link_github: self.link_github,
            link_facebook: self.link_facebook,
            show_in_menu: self.show_in_menu,
        }
    }
}

/// Editable post fields, shared by create and replace.
#[derive(Debug, Clone)]
pub struct PostParam {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub post_type: String,
    /// Category id; `0` when the form leaves it out.
    pub category: i32,
    pub content: String,
    pub link_github: String,
    pub link_facebook: String,
    pub show_in_menu: bool,
}

impl PostParam {
    /// Validates a submitted post form.
    ///
    /// # Arguments
    /// - `dto` - Form fields as submitted
    /// - `path_id` - Id from the request path; takes precedence over the form's `id`
    ///
    /// # Returns
    /// - `Ok(PostParam)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - Missing id or a malformed numeric/boolean field
    pub fn from_dto(dto: PostFormDto, path_id: Option<i32>) -> Result<Self, AppError> {
        let id = match path_id {
            Some(id) => id,
            None => parse_required_i32("id", dto.id.as_deref())?,
        };

        Ok(Self {
            id,
            title: dto.title,
            subtitle: dto.subtitle,
            post_type: dto.post_type,
            category: parse_optional_i32("category", dto.category.as_deref())?.unwrap_or(0),
            content: dto.content,
            link_github: dto.link_github,
            link_facebook: dto.link_facebook,
            show_in_menu: parse_bool("showInMenu", dto.show_in_menu.as_deref())?,
        })
    }
}
