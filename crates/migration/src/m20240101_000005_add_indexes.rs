use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Film: lookups and cascades by director
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_film_director")
                    .table(Film::Table)
                    .col(Film::DirectorId)
                    .to_owned(),
            )
            .await?;

        // FilmActor: both sides of the association
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_film_actor_film")
                    .table(FilmActor::Table)
                    .col(FilmActor::FilmId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_film_actor_actor")
                    .table(FilmActor::Table)
                    .col(FilmActor::ActorId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_film_actor_actor").table(FilmActor::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_film_actor_film").table(FilmActor::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_film_director").table(Film::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Film { Table, DirectorId }

#[derive(DeriveIden)]
enum FilmActor { Table, FilmId, ActorId }
