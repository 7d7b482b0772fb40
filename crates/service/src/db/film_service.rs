use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, TransactionTrait};
use tracing::debug;
use models::{director, film};
use crate::catalog::domain::{FilmWithDirector, NewFilm};
use crate::db::film_actor_service;
use crate::errors::ServiceError;

/// Create a film and its cast links in one transaction.
/// A failing link rolls the film back as well.
pub async fn create_film_with_actors(db: &DatabaseConnection, input: NewFilm) -> Result<film::Model, ServiceError> {
    let txn = db.begin().await?;
    let created = film::create(&txn, &input.title, input.year, input.director_id).await?;
    for actor_id in &input.actor_ids {
        film_actor_service::create_link(&txn, created.id, *actor_id).await?;
    }
    txn.commit().await?;
    debug!(film_id = created.id, links = input.actor_ids.len(), "film_created_with_links");
    Ok(created)
}

/// List films ordered by id, each with its director (if it still exists).
pub async fn list_films_with_director(db: &DatabaseConnection) -> Result<Vec<FilmWithDirector>, ServiceError> {
    let rows = film::Entity::find()
        .find_also_related(director::Entity)
        .order_by_asc(film::Column::Id)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(|(film, director)| FilmWithDirector { film, director }).collect())
}

/// Get film by id.
pub async fn get_film(db: &DatabaseConnection, id: i32) -> Result<Option<film::Model>, ServiceError> {
    Ok(film::Entity::find_by_id(id).one(db).await?)
}

/// Update title and year.
pub async fn update_film(db: &DatabaseConnection, id: i32, title: &str, year: i32) -> Result<Option<film::Model>, ServiceError> {
    Ok(film::retitle(db, id, title, year).await?)
}

/// Delete a film together with its links.
pub async fn delete_film_cascade(db: &DatabaseConnection, id: i32) -> Result<Option<u64>, ServiceError> {
    let txn = db.begin().await?;
    if film::Entity::find_by_id(id).one(&txn).await?.is_none() {
        return Ok(None);
    }
    let links = film_actor_service::delete_links_for_films(&txn, &[id]).await?;
    film::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    Ok(Some(links))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::{actor, film_actor};
    use sea_orm::{ConnectionTrait, PaginatorTrait};

    fn new_film(title: &str, director_id: Option<i32>, actor_ids: Vec<i32>) -> NewFilm {
        NewFilm { title: title.into(), year: 2010, director_id, actor_ids }
    }

    #[tokio::test]
    async fn create_links_every_actor_in_order() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let d = director::create(&db, "Christopher Nolan").await?;
        let a = actor::create(&db, "Leonardo DiCaprio").await?;
        let b = actor::create(&db, "Elliot Page").await?;

        let f = create_film_with_actors(&db, new_film("Inception", Some(d.id), vec![b.id, a.id])).await?;
        assert_eq!(f.director_id, Some(d.id));

        let links = film_actor_service::list_links_for_film(&db, f.id).await?;
        assert_eq!(links.len(), 2);
        assert!(links.iter().all(|l| l.film_id == f.id));
        assert_eq!(links.iter().map(|l| l.actor_id).collect::<Vec<_>>(), vec![b.id, a.id]);
        Ok(())
    }

    #[tokio::test]
    async fn create_is_atomic_when_linking_fails() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        db.execute_unprepared("DROP TABLE film_actor").await?;

        let res = create_film_with_actors(&db, new_film("Doomed", None, vec![1])).await;
        assert!(matches!(res, Err(ServiceError::Model(_)) | Err(ServiceError::Db(_))));
        assert_eq!(film::Entity::find().count(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn list_with_director_tolerates_dangling_reference() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let d = director::create(&db, "Ridley Scott").await?;
        create_film_with_actors(&db, new_film("Alien", Some(d.id), vec![])).await?;
        create_film_with_actors(&db, new_film("Lost", Some(d.id + 50), vec![])).await?;

        let rows = list_films_with_director(&db).await?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].director.as_ref().map(|d| d.id), Some(d.id));
        assert!(rows[1].director.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn update_leaves_director_and_links() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let d = director::create(&db, "Denis Villeneuve").await?;
        let a = actor::create(&db, "Ryan Gosling").await?;
        let f = create_film_with_actors(&db, new_film("Blade Runner", Some(d.id), vec![a.id])).await?;

        let updated = update_film(&db, f.id, "Blade Runner 2049", 2017).await?.expect("exists");
        assert_eq!(updated.title, "Blade Runner 2049");
        assert_eq!(updated.year, 2017);
        assert_eq!(updated.director_id, Some(d.id));
        assert_eq!(film_actor_service::list_links_for_film(&db, f.id).await?.len(), 1);

        assert!(update_film(&db, f.id + 1, "Nope", 2000).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_film_and_its_links_only() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = actor::create(&db, "Tom Hardy").await?;
        let keep = create_film_with_actors(&db, new_film("Dunkirk", None, vec![a.id])).await?;
        let gone = create_film_with_actors(&db, new_film("Venom", None, vec![a.id, a.id])).await?;

        assert_eq!(delete_film_cascade(&db, gone.id).await?, Some(2));
        assert!(get_film(&db, gone.id).await?.is_none());
        assert_eq!(film_actor::Entity::find().count(&db).await?, 1);
        assert!(get_film(&db, keep.id).await?.is_some());

        assert_eq!(delete_film_cascade(&db, gone.id).await?, None);
        Ok(())
    }
}
