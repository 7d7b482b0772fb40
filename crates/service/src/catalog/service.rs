use std::sync::Arc;

use tracing::{info, instrument, warn};

use models::{actor, director, film, film_actor};

use super::domain::{
    ActorListing, CascadeReport, CreateFilmInput, DirectorPage, DirectorWithFilms, FilmWithDirector,
    LinkActorInput, NameInput, UpdateFilmInput,
};
use super::repo::memory::InMemoryCatalogRepository;
use super::repository::CatalogRepository;
use crate::errors::ServiceError;

/// Catalog service behind a trait object, as held by the HTTP layer.
pub type DynCatalogService = CatalogService<dyn CatalogRepository>;

/// Catalog business service independent of web framework.
///
/// Validates request shapes, turns missing rows into [`ServiceError::NotFound`]
/// and delegates persistence (including cascades) to the repository.
pub struct CatalogService<R: CatalogRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CatalogRepository + ?Sized> CatalogService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create a film and link its actors in submission order.
    ///
    /// # Examples
    /// ```
    /// use service::catalog::{CatalogService, repo::memory::InMemoryCatalogRepository};
    /// use service::catalog::domain::CreateFilmInput;
    /// use std::sync::Arc;
    /// let svc = CatalogService::new(Arc::new(InMemoryCatalogRepository::new()));
    /// let input = CreateFilmInput { title: Some("Inception".into()), year: Some(2010), director_id: Some(1), actors: vec![5, 6] };
    /// let film = tokio_test::block_on(svc.create_film(input)).unwrap();
    /// assert_eq!(film.title, "Inception");
    /// let links = tokio_test::block_on(svc.film_links(film.id)).unwrap();
    /// assert_eq!(links.iter().map(|l| l.actor_id).collect::<Vec<_>>(), vec![5, 6]);
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create_film(&self, input: CreateFilmInput) -> Result<film::Model, ServiceError> {
        let new_film = input.validate()?;
        let links = new_film.actor_ids.len();
        let created = self.repo.create_film(new_film).await?;
        info!(film_id = created.id, director_id = ?created.director_id, links, "film_created");
        Ok(created)
    }

    /// All films with their directors.
    pub async fn list_films(&self) -> Result<Vec<FilmWithDirector>, ServiceError> {
        self.repo.list_films_with_director().await
    }

    pub async fn get_film(&self, id: i32) -> Result<film::Model, ServiceError> {
        self.repo.get_film(id).await?.ok_or_else(|| ServiceError::not_found("Film"))
    }

    /// Overwrite title and year; director and cast stay untouched.
    #[instrument(skip(self, input))]
    pub async fn update_film(&self, id: i32, input: UpdateFilmInput) -> Result<film::Model, ServiceError> {
        let (title, year) = input.validate()?;
        let updated = self
            .repo
            .update_film(id, &title, year)
            .await?
            .ok_or_else(|| ServiceError::not_found("Film"))?;
        info!(film_id = id, "film_updated");
        Ok(updated)
    }

    /// Delete a film and its actor links; returns the refreshed film list.
    #[instrument(skip(self))]
    pub async fn delete_film(&self, id: i32) -> Result<Vec<FilmWithDirector>, ServiceError> {
        let links = self
            .repo
            .delete_film_cascade(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Film"))?;
        info!(film_id = id, links_deleted = links, "film_deleted");
        self.list_films().await
    }

    #[instrument(skip(self, input))]
    pub async fn create_director(&self, input: NameInput) -> Result<director::Model, ServiceError> {
        let name = input.validate()?;
        let created = self.repo.create_director(&name).await?;
        info!(director_id = created.id, "director_created");
        Ok(created)
    }

    /// All directors with their films.
    pub async fn list_directors(&self) -> Result<Vec<DirectorWithFilms>, ServiceError> {
        self.repo.list_directors_with_films().await
    }

    /// Director detail plus the sidebar list.
    pub async fn director_page(&self, id: i32) -> Result<DirectorPage, ServiceError> {
        let director = self
            .repo
            .get_director(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Director"))?;
        let directors = self.repo.list_directors().await?;
        Ok(DirectorPage { director, directors })
    }

    #[instrument(skip(self, input))]
    pub async fn update_director(&self, id: i32, input: NameInput) -> Result<director::Model, ServiceError> {
        let name = input.validate()?;
        let updated = self
            .repo
            .update_director(id, &name)
            .await?
            .ok_or_else(|| ServiceError::not_found("Director"))?;
        info!(director_id = id, "director_updated");
        Ok(updated)
    }

    /// Cascade-delete a director with its films and their links.
    /// Unknown ids succeed with an empty report.
    #[instrument(skip(self))]
    pub async fn delete_director(&self, id: i32) -> Result<CascadeReport, ServiceError> {
        let report = self.repo.delete_director_cascade(id).await?;
        if report.director_deleted {
            info!(director_id = id, films_deleted = report.films_deleted, links_deleted = report.links_deleted, "director_deleted");
        } else {
            warn!(director_id = id, "director_delete_unknown_id");
        }
        Ok(report)
    }

    #[instrument(skip(self, input))]
    pub async fn create_actor(&self, input: NameInput) -> Result<actor::Model, ServiceError> {
        let name = input.validate()?;
        let created = self.repo.create_actor(&name).await?;
        info!(actor_id = created.id, "actor_created");
        Ok(created)
    }

    pub async fn list_actors(&self) -> Result<Vec<actor::Model>, ServiceError> {
        self.repo.list_actors().await
    }

    pub async fn get_actor(&self, id: i32) -> Result<actor::Model, ServiceError> {
        self.repo.get_actor(id).await?.ok_or_else(|| ServiceError::not_found("Actor"))
    }

    /// Rename an actor; returns it together with the refreshed actor list.
    #[instrument(skip(self, input))]
    pub async fn update_actor(&self, id: i32, input: NameInput) -> Result<ActorListing, ServiceError> {
        let name = input.validate()?;
        let actor = self
            .repo
            .update_actor(id, &name)
            .await?
            .ok_or_else(|| ServiceError::not_found("Actor"))?;
        info!(actor_id = id, "actor_updated");
        let actors = self.repo.list_actors().await?;
        Ok(ActorListing { actor, actors })
    }

    /// Delete an actor and its film links; returns the refreshed actor list.
    #[instrument(skip(self))]
    pub async fn delete_actor(&self, id: i32) -> Result<Vec<actor::Model>, ServiceError> {
        let links = self
            .repo
            .delete_actor_cascade(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Actor"))?;
        info!(actor_id = id, links_deleted = links, "actor_deleted");
        self.repo.list_actors().await
    }

    /// Add one actor to an existing film. Both sides must exist.
    #[instrument(skip(self, input))]
    pub async fn link_actor(&self, film_id: i32, input: LinkActorInput) -> Result<film_actor::Model, ServiceError> {
        let actor_id = input.validate()?;
        self.get_film(film_id).await?;
        self.get_actor(actor_id).await?;
        let link = self.repo.link_actor(film_id, actor_id).await?;
        info!(film_id, actor_id, link_id = link.id, "actor_linked");
        Ok(link)
    }

    /// Remove an actor from a film; NotFound when they were not linked.
    #[instrument(skip(self))]
    pub async fn unlink_actor(&self, film_id: i32, actor_id: i32) -> Result<u64, ServiceError> {
        self.get_film(film_id).await?;
        let removed = self.repo.unlink_actor(film_id, actor_id).await?;
        if removed == 0 {
            return Err(ServiceError::not_found("Film actor link"));
        }
        info!(film_id, actor_id, removed, "actor_unlinked");
        Ok(removed)
    }

    /// Link rows of a film in submission order.
    pub async fn film_links(&self, film_id: i32) -> Result<Vec<film_actor::Model>, ServiceError> {
        self.get_film(film_id).await?;
        self.repo.list_film_links(film_id).await
    }

    /// Actors cast in a film.
    pub async fn film_cast(&self, film_id: i32) -> Result<Vec<actor::Model>, ServiceError> {
        self.get_film(film_id).await?;
        self.repo.list_film_actors(film_id).await
    }
}

impl DynCatalogService {
    /// Service over a fresh in-memory store.
    pub fn in_memory() -> Self {
        let repo: Arc<dyn CatalogRepository> = Arc::new(InMemoryCatalogRepository::new());
        Self::new(repo)
    }
}
