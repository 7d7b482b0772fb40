use std::time::Duration;

use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

pub use configs::DatabaseConfig;

/// Lifetime of the single in-memory connection. Recycling it would swap in an
/// empty database, so it outlives any test or dev session.
const MEMORY_CONN_LIFETIME: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Open a pool from `cfg`. In-memory SQLite (meant for tests) is pinned to one
/// long-lived connection.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(cfg)).await?;
    Ok(db)
}

pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if is_memory(&cfg.url) {
        // every pooled connection to `:memory:` is a separate database
        opt.max_connections(1)
            .idle_timeout(MEMORY_CONN_LIFETIME)
            .max_lifetime(MEMORY_CONN_LIFETIME);
    } else {
        opt.max_connections(cfg.max_connections)
            .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }
    opt
}

/// Bring the schema up to date. Safe to call on every startup.
pub async fn sync_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    migration::Migrator::up(db, None).await?;
    info!(event = "schema_synced", "database schema is up to date");
    Ok(())
}

/// Round-trip to the database.
pub async fn test_connection(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.ping().await
}

fn is_memory(url: &str) -> bool {
    url.starts_with("sqlite::memory:") || url.contains("mode=memory")
}
