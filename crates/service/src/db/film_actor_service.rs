use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, QuerySelect};
use models::{actor, film, film_actor};
use crate::errors::ServiceError;

/// Append one link. Duplicates are allowed.
pub async fn create_link<C: ConnectionTrait>(db: &C, film_id: i32, actor_id: i32) -> Result<film_actor::Model, ServiceError> {
    Ok(film_actor::create(db, film_id, actor_id).await?)
}

/// Links of one film ordered by link id, i.e. submission order.
pub async fn list_links_for_film<C: ConnectionTrait>(db: &C, film_id: i32) -> Result<Vec<film_actor::Model>, ServiceError> {
    Ok(film_actor::Entity::find()
        .filter(film_actor::Column::FilmId.eq(film_id))
        .order_by_asc(film_actor::Column::Id)
        .all(db)
        .await?)
}

/// Actors linked to a film through the junction table, without repeats.
pub async fn list_actors_for_film<C: ConnectionTrait>(db: &C, film: &film::Model) -> Result<Vec<actor::Model>, ServiceError> {
    Ok(film
        .find_related(actor::Entity)
        .distinct()
        .order_by_asc(actor::Column::Id)
        .all(db)
        .await?)
}

/// Remove all links between the pair.
pub async fn delete_links<C: ConnectionTrait>(db: &C, film_id: i32, actor_id: i32) -> Result<u64, ServiceError> {
    let res = film_actor::Entity::delete_many()
        .filter(film_actor::Column::FilmId.eq(film_id))
        .filter(film_actor::Column::ActorId.eq(actor_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

/// Remove every link pointing at any of the given films.
pub async fn delete_links_for_films<C: ConnectionTrait>(db: &C, film_ids: &[i32]) -> Result<u64, ServiceError> {
    if film_ids.is_empty() {
        return Ok(0);
    }
    let res = film_actor::Entity::delete_many()
        .filter(film_actor::Column::FilmId.is_in(film_ids.iter().copied()))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

/// Remove every link pointing at the actor.
pub async fn delete_links_for_actor<C: ConnectionTrait>(db: &C, actor_id: i32) -> Result<u64, ServiceError> {
    let res = film_actor::Entity::delete_many()
        .filter(film_actor::Column::ActorId.eq(actor_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}
