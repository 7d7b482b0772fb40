//! Create `actor` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Actor::Table)
                    .if_not_exists()
                    .col(pk_auto(Actor::Id))
                    .col(string_len(Actor::Name, 200))
                    .col(timestamp_with_time_zone(Actor::CreatedAt))
                    .col(timestamp_with_time_zone(Actor::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Actor::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Actor { Table, Id, Name, CreatedAt, UpdatedAt }
