use sea_orm::DatabaseConnection;
use models::{actor, director, film, film_actor};

use crate::catalog::domain::{CascadeReport, DirectorWithFilms, FilmWithDirector, NewFilm};
use crate::catalog::repository::CatalogRepository;
use crate::db::{actor_service, director_service, film_actor_service, film_service};
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmCatalogRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl CatalogRepository for SeaOrmCatalogRepository {
    async fn create_film(&self, film: NewFilm) -> Result<film::Model, ServiceError> {
        film_service::create_film_with_actors(&self.db, film).await
    }

    async fn list_films_with_director(&self) -> Result<Vec<FilmWithDirector>, ServiceError> {
        film_service::list_films_with_director(&self.db).await
    }

    async fn get_film(&self, id: i32) -> Result<Option<film::Model>, ServiceError> {
        film_service::get_film(&self.db, id).await
    }

    async fn update_film(&self, id: i32, title: &str, year: i32) -> Result<Option<film::Model>, ServiceError> {
        film_service::update_film(&self.db, id, title, year).await
    }

    async fn delete_film_cascade(&self, id: i32) -> Result<Option<u64>, ServiceError> {
        film_service::delete_film_cascade(&self.db, id).await
    }

    async fn create_director(&self, name: &str) -> Result<director::Model, ServiceError> {
        director_service::create_director(&self.db, name).await
    }

    async fn list_directors(&self) -> Result<Vec<director::Model>, ServiceError> {
        director_service::list_directors(&self.db).await
    }

    async fn list_directors_with_films(&self) -> Result<Vec<DirectorWithFilms>, ServiceError> {
        director_service::list_directors_with_films(&self.db).await
    }

    async fn get_director(&self, id: i32) -> Result<Option<director::Model>, ServiceError> {
        director_service::get_director(&self.db, id).await
    }

    async fn update_director(&self, id: i32, name: &str) -> Result<Option<director::Model>, ServiceError> {
        director_service::update_director(&self.db, id, name).await
    }

    async fn delete_director_cascade(&self, id: i32) -> Result<CascadeReport, ServiceError> {
        director_service::delete_director_cascade(&self.db, id).await
    }

    async fn create_actor(&self, name: &str) -> Result<actor::Model, ServiceError> {
        actor_service::create_actor(&self.db, name).await
    }

    async fn list_actors(&self) -> Result<Vec<actor::Model>, ServiceError> {
        actor_service::list_actors(&self.db).await
    }

    async fn get_actor(&self, id: i32) -> Result<Option<actor::Model>, ServiceError> {
        actor_service::get_actor(&self.db, id).await
    }

    async fn update_actor(&self, id: i32, name: &str) -> Result<Option<actor::Model>, ServiceError> {
        actor_service::update_actor(&self.db, id, name).await
    }

    async fn delete_actor_cascade(&self, id: i32) -> Result<Option<u64>, ServiceError> {
        actor_service::delete_actor_cascade(&self.db, id).await
    }

    async fn link_actor(&self, film_id: i32, actor_id: i32) -> Result<film_actor::Model, ServiceError> {
        film_actor_service::create_link(&self.db, film_id, actor_id).await
    }

    async fn unlink_actor(&self, film_id: i32, actor_id: i32) -> Result<u64, ServiceError> {
        film_actor_service::delete_links(&self.db, film_id, actor_id).await
    }

    async fn list_film_links(&self, film_id: i32) -> Result<Vec<film_actor::Model>, ServiceError> {
        film_actor_service::list_links_for_film(&self.db, film_id).await
    }

    async fn list_film_actors(&self, film_id: i32) -> Result<Vec<actor::Model>, ServiceError> {
        match film_service::get_film(&self.db, film_id).await? {
            Some(film) => film_actor_service::list_actors_for_film(&self.db, &film).await,
            None => Ok(Vec::new()),
        }
    }
}
