use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, TransactionTrait};
use models::actor;
use crate::db::film_actor_service;
use crate::errors::ServiceError;

/// Create an actor.
pub async fn create_actor(db: &DatabaseConnection, name: &str) -> Result<actor::Model, ServiceError> {
    Ok(actor::create(db, name).await?)
}

/// List actors ordered by id.
pub async fn list_actors(db: &DatabaseConnection) -> Result<Vec<actor::Model>, ServiceError> {
    Ok(actor::Entity::find().order_by_asc(actor::Column::Id).all(db).await?)
}

/// Get actor by id.
pub async fn get_actor(db: &DatabaseConnection, id: i32) -> Result<Option<actor::Model>, ServiceError> {
    Ok(actor::Entity::find_by_id(id).one(db).await?)
}

/// Rename actor.
pub async fn update_actor(db: &DatabaseConnection, id: i32, name: &str) -> Result<Option<actor::Model>, ServiceError> {
    Ok(actor::rename(db, id, name).await?)
}

/// Delete an actor together with its links.
pub async fn delete_actor_cascade(db: &DatabaseConnection, id: i32) -> Result<Option<u64>, ServiceError> {
    let txn = db.begin().await?;
    if actor::Entity::find_by_id(id).one(&txn).await?.is_none() {
        return Ok(None);
    }
    let links = film_actor_service::delete_links_for_actor(&txn, id).await?;
    actor::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    Ok(Some(links))
}
