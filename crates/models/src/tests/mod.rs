/// Model-level create/rename helpers
pub mod crud_tests;

/// Entity relations: belongs_to, has_many and the film ↔ actor junction
pub mod relation_tests;

use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::db::{connect_with_config, DatabaseConfig};

/// Fresh in-memory database with the full schema applied.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
