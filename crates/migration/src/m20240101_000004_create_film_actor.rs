//! Create `film_actor` join table.
//!
//! Rows carry their own surrogate id: the same (film, actor) pair may be
//! linked more than once, so the pair cannot be the primary key.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FilmActor::Table)
                    .if_not_exists()
                    .col(pk_auto(FilmActor::Id))
                    .col(integer(FilmActor::FilmId))
                    .col(integer(FilmActor::ActorId))
                    .col(timestamp_with_time_zone(FilmActor::CreatedAt))
                    .col(timestamp_with_time_zone(FilmActor::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(FilmActor::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum FilmActor { Table, Id, FilmId, ActorId, CreatedAt, UpdatedAt }
