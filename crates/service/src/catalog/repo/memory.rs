//! In-memory repository for tests, benches and doc examples.
//!
//! Mirrors the SeaORM implementation's ordering and cascade rules: ids are
//! never reused, lists come back ordered by id, and cascades drop links.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use tokio::sync::RwLock;

use models::{actor, director, film, film_actor};

use crate::catalog::domain::{CascadeReport, DirectorWithFilms, FilmWithDirector, NewFilm};
use crate::catalog::repository::CatalogRepository;
use crate::errors::ServiceError;

#[derive(Default)]
struct Tables {
    films: BTreeMap<i32, film::Model>,
    directors: BTreeMap<i32, director::Model>,
    actors: BTreeMap<i32, actor::Model>,
    links: BTreeMap<i32, film_actor::Model>,
    last_film_id: i32,
    last_director_id: i32,
    last_actor_id: i32,
    last_link_id: i32,
}

impl Tables {
    fn push_link(&mut self, film_id: i32, actor_id: i32, now: DateTimeWithTimeZone) -> film_actor::Model {
        self.last_link_id += 1;
        let link = film_actor::Model { id: self.last_link_id, film_id, actor_id, created_at: now, updated_at: now };
        self.links.insert(link.id, link.clone());
        link
    }

    fn drop_links_where(&mut self, pred: impl Fn(&film_actor::Model) -> bool) -> u64 {
        let before = self.links.len();
        self.links.retain(|_, l| !pred(l));
        (before - self.links.len()) as u64
    }
}

#[derive(Default)]
pub struct InMemoryCatalogRepository {
    tables: RwLock<Tables>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self { Self::default() }
}

fn now() -> DateTimeWithTimeZone {
    Utc::now().into()
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn create_film(&self, input: NewFilm) -> Result<film::Model, ServiceError> {
        let mut t = self.tables.write().await;
        let ts = now();
        t.last_film_id += 1;
        let created = film::Model {
            id: t.last_film_id,
            title: input.title,
            year: input.year,
            director_id: input.director_id,
            created_at: ts,
            updated_at: ts,
        };
        t.films.insert(created.id, created.clone());
        for actor_id in input.actor_ids {
            t.push_link(created.id, actor_id, ts);
        }
        Ok(created)
    }

    async fn list_films_with_director(&self) -> Result<Vec<FilmWithDirector>, ServiceError> {
        let t = self.tables.read().await;
        Ok(t.films
            .values()
            .map(|f| FilmWithDirector {
                film: f.clone(),
                director: f.director_id.and_then(|id| t.directors.get(&id).cloned()),
            })
            .collect())
    }

    async fn get_film(&self, id: i32) -> Result<Option<film::Model>, ServiceError> {
        Ok(self.tables.read().await.films.get(&id).cloned())
    }

    async fn update_film(&self, id: i32, title: &str, year: i32) -> Result<Option<film::Model>, ServiceError> {
        let mut t = self.tables.write().await;
        Ok(t.films.get_mut(&id).map(|f| {
            f.title = title.to_string();
            f.year = year;
            f.updated_at = now();
            f.clone()
        }))
    }

    async fn delete_film_cascade(&self, id: i32) -> Result<Option<u64>, ServiceError> {
        let mut t = self.tables.write().await;
        if t.films.remove(&id).is_none() {
            return Ok(None);
        }
        Ok(Some(t.drop_links_where(|l| l.film_id == id)))
    }

    async fn create_director(&self, name: &str) -> Result<director::Model, ServiceError> {
        let mut t = self.tables.write().await;
        let ts = now();
        t.last_director_id += 1;
        let created = director::Model { id: t.last_director_id, name: name.to_string(), created_at: ts, updated_at: ts };
        t.directors.insert(created.id, created.clone());
        Ok(created)
    }

    async fn list_directors(&self) -> Result<Vec<director::Model>, ServiceError> {
        Ok(self.tables.read().await.directors.values().cloned().collect())
    }

    async fn list_directors_with_films(&self) -> Result<Vec<DirectorWithFilms>, ServiceError> {
        let t = self.tables.read().await;
        Ok(t.directors
            .values()
            .map(|d| DirectorWithFilms {
                director: d.clone(),
                films: t.films.values().filter(|f| f.director_id == Some(d.id)).cloned().collect(),
            })
            .collect())
    }

    async fn get_director(&self, id: i32) -> Result<Option<director::Model>, ServiceError> {
        Ok(self.tables.read().await.directors.get(&id).cloned())
    }

    async fn update_director(&self, id: i32, name: &str) -> Result<Option<director::Model>, ServiceError> {
        let mut t = self.tables.write().await;
        Ok(t.directors.get_mut(&id).map(|d| {
            d.name = name.to_string();
            d.updated_at = now();
            d.clone()
        }))
    }

    async fn delete_director_cascade(&self, id: i32) -> Result<CascadeReport, ServiceError> {
        let mut t = self.tables.write().await;
        let film_ids: Vec<i32> = t.films.values().filter(|f| f.director_id == Some(id)).map(|f| f.id).collect();
        let links_deleted = t.drop_links_where(|l| film_ids.contains(&l.film_id));
        for film_id in &film_ids {
            t.films.remove(film_id);
        }
        let director_deleted = t.directors.remove(&id).is_some();
        Ok(CascadeReport { films_deleted: film_ids.len() as u64, links_deleted, director_deleted })
    }

    async fn create_actor(&self, name: &str) -> Result<actor::Model, ServiceError> {
        let mut t = self.tables.write().await;
        let ts = now();
        t.last_actor_id += 1;
        let created = actor::Model { id: t.last_actor_id, name: name.to_string(), created_at: ts, updated_at: ts };
        t.actors.insert(created.id, created.clone());
        Ok(created)
    }

    async fn list_actors(&self) -> Result<Vec<actor::Model>, ServiceError> {
        Ok(self.tables.read().await.actors.values().cloned().collect())
    }

    async fn get_actor(&self, id: i32) -> Result<Option<actor::Model>, ServiceError> {
        Ok(self.tables.read().await.actors.get(&id).cloned())
    }

    async fn update_actor(&self, id: i32, name: &str) -> Result<Option<actor::Model>, ServiceError> {
        let mut t = self.tables.write().await;
        Ok(t.actors.get_mut(&id).map(|a| {
            a.name = name.to_string();
            a.updated_at = now();
            a.clone()
        }))
    }

    async fn delete_actor_cascade(&self, id: i32) -> Result<Option<u64>, ServiceError> {
        let mut t = self.tables.write().await;
        if t.actors.remove(&id).is_none() {
            return Ok(None);
        }
        Ok(Some(t.drop_links_where(|l| l.actor_id == id)))
    }

    async fn link_actor(&self, film_id: i32, actor_id: i32) -> Result<film_actor::Model, ServiceError> {
        let mut t = self.tables.write().await;
        Ok(t.push_link(film_id, actor_id, now()))
    }

    async fn unlink_actor(&self, film_id: i32, actor_id: i32) -> Result<u64, ServiceError> {
        let mut t = self.tables.write().await;
        Ok(t.drop_links_where(|l| l.film_id == film_id && l.actor_id == actor_id))
    }

    async fn list_film_links(&self, film_id: i32) -> Result<Vec<film_actor::Model>, ServiceError> {
        let t = self.tables.read().await;
        Ok(t.links.values().filter(|l| l.film_id == film_id).cloned().collect())
    }

    async fn list_film_actors(&self, film_id: i32) -> Result<Vec<actor::Model>, ServiceError> {
        let t = self.tables.read().await;
        Ok(t.actors
            .values()
            .filter(|a| t.links.values().any(|l| l.film_id == film_id && l.actor_id == a.id))
            .cloned()
            .collect())
    }
}
