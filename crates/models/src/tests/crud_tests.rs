use super::setup_test_db;
use crate::{actor, db, director, errors::{ModelError, MAX_TEXT_LEN}, film, film_actor};
use anyhow::Result;
use sea_orm::EntityTrait;

#[tokio::test]
async fn test_director_create_and_rename() -> Result<()> {
    let db = setup_test_db().await?;

    let created = director::create(&db, "  Christopher Nolan ").await?;
    assert_eq!(created.name, "Christopher Nolan");
    assert_eq!(created.created_at, created.updated_at);

    let renamed = director::rename(&db, created.id, "C. Nolan").await?.expect("director exists");
    assert_eq!(renamed.id, created.id);
    assert_eq!(renamed.name, "C. Nolan");
    assert!(renamed.updated_at >= created.updated_at);

    assert!(director::rename(&db, created.id + 100, "Nobody").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_blank_names_are_rejected() -> Result<()> {
    let db = setup_test_db().await?;

    assert!(matches!(director::create(&db, "   ").await, Err(ModelError::Validation(_))));
    assert!(matches!(actor::create(&db, "").await, Err(ModelError::Validation(_))));
    assert!(matches!(film::create(&db, " ", 2010, None).await, Err(ModelError::Validation(_))));
    assert!(director::Entity::find().all(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_over_long_text_is_rejected() -> Result<()> {
    let db = setup_test_db().await?;

    let longest = "x".repeat(MAX_TEXT_LEN);
    assert_eq!(actor::create(&db, &longest).await?.name.len(), MAX_TEXT_LEN);

    let too_long = "x".repeat(MAX_TEXT_LEN + 1);
    assert!(matches!(actor::create(&db, &too_long).await, Err(ModelError::Validation(m)) if m == "name too long"));
    assert!(matches!(film::create(&db, &too_long, 2010, None).await, Err(ModelError::Validation(_))));
    assert_eq!(actor::Entity::find().all(&db).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_ids_are_fresh() -> Result<()> {
    let db = setup_test_db().await?;

    let a = actor::create(&db, "Leonardo DiCaprio").await?;
    let b = actor::create(&db, "Elliot Page").await?;
    assert_ne!(a.id, b.id);

    // sqlite AUTOINCREMENT never reuses an id, even after delete
    actor::Entity::delete_by_id(b.id).exec(&db).await?;
    let c = actor::create(&db, "Tom Hardy").await?;
    assert!(c.id > b.id);
    Ok(())
}

#[tokio::test]
async fn test_film_retitle_keeps_director() -> Result<()> {
    let db = setup_test_db().await?;

    let d = director::create(&db, "Denis Villeneuve").await?;
    let f = film::create(&db, "Dune", 2020, Some(d.id)).await?;
    let updated = film::retitle(&db, f.id, "Dune: Part One", 2021).await?.expect("film exists");

    assert_eq!(updated.title, "Dune: Part One");
    assert_eq!(updated.year, 2021);
    assert_eq!(updated.director_id, Some(d.id));
    assert!(film::retitle(&db, 9999, "Ghost", 1999).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_film_accepts_dangling_director() -> Result<()> {
    let db = setup_test_db().await?;

    let f = film::create(&db, "Orphan", 2001, Some(42)).await?;
    let stored = film::Entity::find_by_id(f.id).one(&db).await?.expect("stored");
    assert_eq!(stored.director_id, Some(42));
    Ok(())
}

#[tokio::test]
async fn test_duplicate_links_are_separate_rows() -> Result<()> {
    let db = setup_test_db().await?;

    let f = film::create(&db, "Heat", 1995, None).await?;
    let a = actor::create(&db, "Al Pacino").await?;
    let first = film_actor::create(&db, f.id, a.id).await?;
    let second = film_actor::create(&db, f.id, a.id).await?;
    assert_ne!(first.id, second.id);
    assert_eq!(film_actor::Entity::find().all(&db).await?.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_models_serialize_camel_case() -> Result<()> {
    let db = setup_test_db().await?;

    let f = film::create(&db, "Inception", 2010, Some(1)).await?;
    let v = serde_json::to_value(&f)?;
    assert_eq!(v["title"], "Inception");
    assert_eq!(v["year"], 2010);
    assert_eq!(v["directorId"], 1);
    assert!(v.get("createdAt").is_some());
    assert!(v.get("director_id").is_none());
    Ok(())
}

#[tokio::test]
async fn test_connection_ping() -> Result<()> {
    let db = setup_test_db().await?;
    db::test_connection(&db).await?;
    Ok(())
}

#[test]
fn test_memory_pool_keeps_its_only_connection() {
    let one_day = std::time::Duration::from_secs(24 * 60 * 60);

    let memory = db::connect_options(&db::DatabaseConfig {
        url: "sqlite::memory:".into(),
        ..Default::default()
    });
    assert_eq!(memory.get_max_connections(), Some(1));
    assert!(memory.get_max_lifetime().is_some_and(|d| d > one_day));
    assert!(memory.get_idle_timeout().is_some_and(|d| d > one_day));

    let cfg = db::DatabaseConfig { url: "sqlite://catalog.db?mode=rwc".into(), ..Default::default() };
    let file = db::connect_options(&cfg);
    assert_eq!(file.get_max_connections(), Some(cfg.max_connections));
    assert_eq!(file.get_max_lifetime(), Some(std::time::Duration::from_secs(cfg.max_lifetime_secs)));
}
