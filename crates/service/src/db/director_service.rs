use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait};
use tracing::debug;
use models::{director, film};
use crate::catalog::domain::{CascadeReport, DirectorWithFilms};
use crate::db::film_actor_service;
use crate::errors::ServiceError;

/// Create a director.
pub async fn create_director(db: &DatabaseConnection, name: &str) -> Result<director::Model, ServiceError> {
    Ok(director::create(db, name).await?)
}

/// List directors ordered by id.
pub async fn list_directors(db: &DatabaseConnection) -> Result<Vec<director::Model>, ServiceError> {
    Ok(director::Entity::find().order_by_asc(director::Column::Id).all(db).await?)
}

/// List directors ordered by id, each with its films ordered by id.
pub async fn list_directors_with_films(db: &DatabaseConnection) -> Result<Vec<DirectorWithFilms>, ServiceError> {
    let rows = director::Entity::find()
        .find_with_related(film::Entity)
        .order_by_asc(director::Column::Id)
        .order_by_asc(film::Column::Id)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(|(director, films)| DirectorWithFilms { director, films }).collect())
}

/// Get director by id.
pub async fn get_director(db: &DatabaseConnection, id: i32) -> Result<Option<director::Model>, ServiceError> {
    Ok(director::Entity::find_by_id(id).one(db).await?)
}

/// Rename director.
pub async fn update_director(db: &DatabaseConnection, id: i32, name: &str) -> Result<Option<director::Model>, ServiceError> {
    Ok(director::rename(db, id, name).await?)
}

/// Delete the director's films, the links of those films, then the director,
/// all in one transaction. Unknown ids delete nothing and still succeed.
pub async fn delete_director_cascade(db: &DatabaseConnection, id: i32) -> Result<CascadeReport, ServiceError> {
    let txn = db.begin().await?;
    let film_ids: Vec<i32> = film::Entity::find()
        .select_only()
        .column(film::Column::Id)
        .filter(film::Column::DirectorId.eq(id))
        .into_tuple()
        .all(&txn)
        .await?;
    let links_deleted = film_actor_service::delete_links_for_films(&txn, &film_ids).await?;
    let films_deleted = film::Entity::delete_many()
        .filter(film::Column::DirectorId.eq(id))
        .exec(&txn)
        .await?
        .rows_affected;
    let director_deleted = director::Entity::delete_by_id(id).exec(&txn).await?.rows_affected > 0;
    txn.commit().await?;
    debug!(director_id = id, films_deleted, links_deleted, director_deleted, "director_cascade_done");
    Ok(CascadeReport { films_deleted, links_deleted, director_deleted })
}
