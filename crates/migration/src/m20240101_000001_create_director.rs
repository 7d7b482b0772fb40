//! Create `director` table.
//!
//! Root of the director → films association.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Director::Table)
                    .if_not_exists()
                    .col(pk_auto(Director::Id))
                    .col(string_len(Director::Name, 200))
                    .col(timestamp_with_time_zone(Director::CreatedAt))
                    .col(timestamp_with_time_zone(Director::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Director::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Director { Table, Id, Name, CreatedAt, UpdatedAt }
