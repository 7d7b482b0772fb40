use async_trait::async_trait;
use models::{actor, director, film, film_actor};

use super::domain::{CascadeReport, DirectorWithFilms, FilmWithDirector, NewFilm};
use crate::errors::ServiceError;

/// Repository abstraction for catalog persistence.
///
/// Lookups return `Ok(None)` for unknown ids; turning that into
/// [`ServiceError::NotFound`] is the service's job. Every `*_cascade` method
/// removes the dependent `film_actor` rows together with the parent row and
/// must leave no partial result behind on failure.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Insert the film and one link per actor id, in order, atomically.
    async fn create_film(&self, film: NewFilm) -> Result<film::Model, ServiceError>;
    async fn list_films_with_director(&self) -> Result<Vec<FilmWithDirector>, ServiceError>;
    async fn get_film(&self, id: i32) -> Result<Option<film::Model>, ServiceError>;
    async fn update_film(&self, id: i32, title: &str, year: i32) -> Result<Option<film::Model>, ServiceError>;
    /// Delete the film and its links. `None` when the film does not exist,
    /// otherwise the number of links removed.
    async fn delete_film_cascade(&self, id: i32) -> Result<Option<u64>, ServiceError>;

    async fn create_director(&self, name: &str) -> Result<director::Model, ServiceError>;
    async fn list_directors(&self) -> Result<Vec<director::Model>, ServiceError>;
    async fn list_directors_with_films(&self) -> Result<Vec<DirectorWithFilms>, ServiceError>;
    async fn get_director(&self, id: i32) -> Result<Option<director::Model>, ServiceError>;
    async fn update_director(&self, id: i32, name: &str) -> Result<Option<director::Model>, ServiceError>;
    /// Delete the director's films, their links, then the director.
    async fn delete_director_cascade(&self, id: i32) -> Result<CascadeReport, ServiceError>;

    async fn create_actor(&self, name: &str) -> Result<actor::Model, ServiceError>;
    async fn list_actors(&self) -> Result<Vec<actor::Model>, ServiceError>;
    async fn get_actor(&self, id: i32) -> Result<Option<actor::Model>, ServiceError>;
    async fn update_actor(&self, id: i32, name: &str) -> Result<Option<actor::Model>, ServiceError>;
    /// Delete the actor and its links. `None` when the actor does not exist.
    async fn delete_actor_cascade(&self, id: i32) -> Result<Option<u64>, ServiceError>;

    async fn link_actor(&self, film_id: i32, actor_id: i32) -> Result<film_actor::Model, ServiceError>;
    /// Remove every link between the pair; returns how many rows went.
    async fn unlink_actor(&self, film_id: i32, actor_id: i32) -> Result<u64, ServiceError>;
    /// Links of a film in insertion order.
    async fn list_film_links(&self, film_id: i32) -> Result<Vec<film_actor::Model>, ServiceError>;
    /// Distinct actors linked to a film, ordered by actor id.
    async fn list_film_actors(&self, film_id: i32) -> Result<Vec<actor::Model>, ServiceError>;
}
