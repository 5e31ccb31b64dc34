use crate::server::{data::post::PostRepository, model::post::PostParam};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod list;
mod update;

/// Builds post parameters with placeholder text fields.
fn post_param(id: i32, category: i32) -> PostParam {
    PostParam {
        id,
        title: format!("Title {}", id),
        subtitle: "Subtitle".to_string(),
        post_type: "article".to_string(),
        category,
        content: "Body".to_string(),
        link_github: "https://github.com/example".to_string(),
        link_facebook: String::new(),
        show_in_menu: true,
    }
}
