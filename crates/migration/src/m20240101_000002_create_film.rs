//! Create `film` table.
//!
//! `director_id` is nullable and intentionally carries no FK constraint;
//! deleting a director cascades through the repository instead.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Film::Table)
                    .if_not_exists()
                    .col(pk_auto(Film::Id))
                    .col(string_len(Film::Title, 200))
                    .col(integer(Film::Year))
                    .col(integer_null(Film::DirectorId))
                    .col(timestamp_with_time_zone(Film::CreatedAt))
                    .col(timestamp_with_time_zone(Film::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Film::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Film { Table, Id, Title, Year, DirectorId, CreatedAt, UpdatedAt }
