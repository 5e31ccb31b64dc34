use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Post::Table)
                    .if_not_exists()
                    .col(integer(Post::Id).primary_key())
                    .col(string(Post::Title))
                    .col(string(Post::Subtitle))
                    .col(string(Post::PostType))
                    .col(integer(Post::Category))
                    .col(timestamp_with_time_zone(Post::CreatedOn))
                    .col(timestamp_with_time_zone(Post::LastEditedOn))
                    .col(text(Post::Content))
                    .col(string(Post::LinkGithub))
                    .col(string(Post::LinkFacebook))
                    .col(boolean(Post::ShowInMenu))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_post_category")
                    .table(Post::Table)
                    .col(Post::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Post::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Post {
    Table,
    Id,
    Title,
    Subtitle,
    PostType,
    Category,
    CreatedOn,
    LastEditedOn,
    Content,
    LinkGithub,
    LinkFacebook,
    ShowInMenu,
}
