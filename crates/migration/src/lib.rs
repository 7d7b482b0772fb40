//! Migrator registering the catalog tables in dependency order.
//! Indexes are applied last.
//!
//! No foreign keys are declared: referential integrity between films,
//! directors, actors and their links is kept by the catalog repository.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_director;
mod m20240101_000002_create_film;
mod m20240101_000003_create_actor;
mod m20240101_000004_create_film_actor;
mod m20240101_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_director::Migration),
            Box::new(m20240101_000002_create_film::Migration),
            Box::new(m20240101_000003_create_actor::Migration),
            Box::new(m20240101_000004_create_film_actor::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000005_add_indexes::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::{ConnectOptions, Database};

    #[tokio::test]
    async fn up_creates_all_tables_and_down_drops_them() -> Result<(), DbErr> {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1);
        let db = Database::connect(opt).await?;
        Migrator::up(&db, None).await?;

        let manager = SchemaManager::new(&db);
        for table in ["director", "film", "actor", "film_actor"] {
            assert!(manager.has_table(table).await?, "missing table {table}");
        }

        Migrator::down(&db, None).await?;
        assert!(!manager.has_table("film_actor").await?);
        assert!(!manager.has_table("film").await?);
        Ok(())
    }
}
