use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    #[serde(rename = "type")]
    pub post_type: String,
    pub category: i32,
    pub created_on: DateTime<Utc>,
    pub last_edited_on: DateTime<Utc>,
    pub content: String,
    pub link_github: String,
    pub link_facebook: String,
    pub show_in_menu: bool,
}

/// Form body for creating or replacing a post.
#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostFormDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default, rename = "type")]
    pub post_type: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub link_github: String,
    #[serde(default)]
    pub link_facebook: String,
    #[serde(default)]
    pub show_in_menu: Option<String>,
}

/// Query for a single post. A non-blank `id` overrides the path segment.
#[derive(Deserialize, Debug, Default)]
pub struct PostQueryDto {
    pub id: Option<String>,
    pub category: Option<String>,
}

/// Optional body of a post delete. A non-blank `id` overrides the path segment.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct PostIdFormDto {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct PostResponseDto {
    pub post: Option<PostDto>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct PostsResponseDto {
    pub posts: Vec<PostDto>,
}
