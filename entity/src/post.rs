use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "post")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub post_type: String,
    pub category: i32,
    pub created_on: DateTimeUtc,
    pub last_edited_on: DateTimeUtc,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub link_github: String,
    pub link_facebook: String,
    pub show_in_menu: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
