use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sponsor::Table)
                    .if_not_exists()
                    .col(pk_uuid(Sponsor::Id))
                    .col(string(Sponsor::Name))
                    .col(string(Sponsor::Logo))
                    .col(string(Sponsor::Tier))
                    .col(big_integer(Sponsor::Expiry))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sponsor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Sponsor {
    Table,
    Id,
    Name,
    Logo,
    Tier,
    Expiry,
}
