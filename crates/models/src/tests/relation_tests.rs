use super::setup_test_db;
use crate::{actor, director, film, film_actor};
use anyhow::Result;
use sea_orm::{EntityTrait, ModelTrait, QueryOrder};

#[tokio::test]
async fn test_film_find_also_director() -> Result<()> {
    let db = setup_test_db().await?;

    let d = director::create(&db, "Ridley Scott").await?;
    film::create(&db, "Alien", 1979, Some(d.id)).await?;
    film::create(&db, "Nameless", 2000, None).await?;

    let rows = film::Entity::find()
        .find_also_related(director::Entity)
        .order_by_asc(film::Column::Id)
        .all(&db)
        .await?;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].1.as_ref().map(|d| d.name.as_str()), Some("Ridley Scott"));
    assert!(rows[1].1.is_none());
    Ok(())
}

#[tokio::test]
async fn test_director_find_with_films() -> Result<()> {
    let db = setup_test_db().await?;

    let a = director::create(&db, "Wes Anderson").await?;
    let b = director::create(&db, "Sofia Coppola").await?;
    film::create(&db, "Rushmore", 1998, Some(a.id)).await?;
    film::create(&db, "Isle of Dogs", 2018, Some(a.id)).await?;

    let rows = director::Entity::find()
        .find_with_related(film::Entity)
        .order_by_asc(director::Column::Id)
        .all(&db)
        .await?;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].0.id, a.id);
    assert_eq!(rows[0].1.len(), 2);
    assert_eq!(rows[1].0.id, b.id);
    assert!(rows[1].1.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_film_actors_via_junction() -> Result<()> {
    let db = setup_test_db().await?;

    let f = film::create(&db, "Inception", 2010, None).await?;
    let other = film::create(&db, "Titanic", 1997, None).await?;
    let leo = actor::create(&db, "Leonardo DiCaprio").await?;
    let ellen = actor::create(&db, "Elliot Page").await?;
    film_actor::create(&db, f.id, leo.id).await?;
    film_actor::create(&db, f.id, ellen.id).await?;
    film_actor::create(&db, other.id, leo.id).await?;

    let mut cast = f.find_related(actor::Entity).all(&db).await?;
    cast.sort_by_key(|a| a.id);
    assert_eq!(cast.iter().map(|a| a.id).collect::<Vec<_>>(), vec![leo.id, ellen.id]);

    let filmography = leo.find_related(film::Entity).all(&db).await?;
    assert_eq!(filmography.len(), 2);
    Ok(())
}
