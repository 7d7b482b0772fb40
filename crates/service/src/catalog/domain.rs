use models::errors::MAX_TEXT_LEN;
use models::{actor, director, film};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Body of `POST /films`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFilmInput {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director_id: Option<i32>,
    #[serde(default)]
    pub actors: Vec<i32>,
}

/// Body of `PUT /films/:id`. Director and cast are not editable here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFilmInput {
    pub title: Option<String>,
    pub year: Option<i32>,
}

/// Body shared by director and actor create/update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameInput {
    pub name: Option<String>,
}

/// Body of `POST /films/:id/actors`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkActorInput {
    pub actor_id: Option<i32>,
}

/// A validated film ready to be stored together with its cast links.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFilm {
    pub title: String,
    pub year: i32,
    pub director_id: Option<i32>,
    /// Linked in this order; duplicates produce duplicate links.
    pub actor_ids: Vec<i32>,
}

/// Film joined with its director for list views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilmWithDirector {
    #[serde(flatten)]
    pub film: film::Model,
    pub director: Option<director::Model>,
}

/// Director joined with all of its films.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorWithFilms {
    #[serde(flatten)]
    pub director: director::Model,
    pub films: Vec<film::Model>,
}

/// Director detail plus the full director list for the sidebar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorPage {
    pub director: director::Model,
    pub directors: Vec<director::Model>,
}

/// What a director cascade removed. All zero/false when the id was unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CascadeReport {
    pub films_deleted: u64,
    pub links_deleted: u64,
    pub director_deleted: bool,
}

/// Actor list after an actor mutation, with the actor it concerned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorListing {
    pub actor: actor::Model,
    pub actors: Vec<actor::Model>,
}

fn required_text(field: &str, value: Option<String>) -> Result<String, ServiceError> {
    let trimmed = match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return Err(ServiceError::Validation(format!("{field} required"))),
    };
    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Err(ServiceError::Validation(format!("{field} too long")));
    }
    Ok(trimmed.to_string())
}

fn required<T>(field: &str, value: Option<T>) -> Result<T, ServiceError> {
    value.ok_or_else(|| ServiceError::Validation(format!("{field} required")))
}

impl CreateFilmInput {
    pub fn validate(self) -> Result<NewFilm, ServiceError> {
        Ok(NewFilm {
            title: required_text("title", self.title)?,
            year: required("year", self.year)?,
            director_id: self.director_id,
            actor_ids: self.actors,
        })
    }
}

impl UpdateFilmInput {
    /// Returns the trimmed `(title, year)` pair.
    pub fn validate(self) -> Result<(String, i32), ServiceError> {
        Ok((required_text("title", self.title)?, required("year", self.year)?))
    }
}

impl NameInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()) }
    }

    pub fn validate(self) -> Result<String, ServiceError> {
        required_text("name", self.name)
    }
}

impl LinkActorInput {
    pub fn validate(self) -> Result<i32, ServiceError> {
        required("actorId", self.actor_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_film_requires_title_and_year() {
        let missing_title = CreateFilmInput { year: Some(2010), ..Default::default() };
        assert!(matches!(missing_title.validate(), Err(ServiceError::Validation(m)) if m == "title required"));

        let missing_year = CreateFilmInput { title: Some("Inception".into()), ..Default::default() };
        assert!(matches!(missing_year.validate(), Err(ServiceError::Validation(m)) if m == "year required"));
    }

    #[test]
    fn create_film_keeps_actor_order_and_duplicates() {
        let input: CreateFilmInput = serde_json::from_value(serde_json::json!({
            "title": " Inception ", "year": 2010, "directorId": 1, "actors": [6, 5, 6]
        }))
        .unwrap();
        let film = input.validate().unwrap();
        assert_eq!(film.title, "Inception");
        assert_eq!(film.director_id, Some(1));
        assert_eq!(film.actor_ids, vec![6, 5, 6]);
    }

    #[test]
    fn actors_default_to_empty() {
        let input: CreateFilmInput =
            serde_json::from_value(serde_json::json!({"title": "Heat", "year": 1995})).unwrap();
        assert!(input.actors.is_empty());
        assert_eq!(input.director_id, None);
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(NameInput::new("   ").validate().is_err());
        assert!(NameInput::default().validate().is_err());
        assert_eq!(NameInput::new(" Tom Hardy ").validate().unwrap(), "Tom Hardy");
    }

    #[test]
    fn text_longer_than_column_is_rejected() {
        assert_eq!(NameInput::new("x".repeat(MAX_TEXT_LEN)).validate().unwrap().len(), MAX_TEXT_LEN);
        let err = NameInput::new("x".repeat(MAX_TEXT_LEN + 1)).validate().unwrap_err();
        assert!(matches!(err, ServiceError::Validation(m) if m == "name too long"));

        let film = CreateFilmInput { title: Some("é".repeat(MAX_TEXT_LEN + 1)), year: Some(2000), ..Default::default() };
        assert!(matches!(film.validate(), Err(ServiceError::Validation(m)) if m == "title too long"));
    }

    #[test]
    fn link_requires_actor_id() {
        assert!(LinkActorInput::default().validate().is_err());
        assert_eq!(LinkActorInput { actor_id: Some(3) }.validate().unwrap(), 3);
    }
}
