use axum::{
    extract::State,
    response::Html,
    Json,
};
use serde::Serialize;
use tera::Context;

use models::{film, film_actor};
use service::catalog::domain::{CreateFilmInput, LinkActorInput, UpdateFilmInput};

use crate::errors::JsonApiError;
use crate::extract::{JsonOrForm, PathParam};
use crate::state::AppState;
use crate::views::PageError;

#[derive(Debug, Serialize)]
pub struct Removed {
    pub removed: u64,
}

#[utoipa::path(post, path = "/films", tag = "films", request_body = crate::openapi::CreateFilmRequest,
    responses((status = 200, description = "Created", body = crate::openapi::FilmDoc), (status = 400, description = "Bad Request", body = crate::openapi::ErrorResponse)))]
pub async fn create(
    State(state): State<AppState>,
    JsonOrForm(input): JsonOrForm<CreateFilmInput>,
) -> Result<Json<film::Model>, JsonApiError> {
    Ok(Json(state.catalog.create_film(input).await?))
}

pub async fn list(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let films = state.catalog.list_films().await.map_err(|e| state.views.error_page(e))?;
    let mut ctx = Context::new();
    ctx.insert("films", &films);
    state.views.page("films", &ctx)
}

pub async fn confirm_delete(State(state): State<AppState>, PathParam(id): PathParam<i32>) -> Result<Html<String>, PageError> {
    let film = state.catalog.get_film(id).await.map_err(|e| state.views.error_page(e))?;
    let mut ctx = Context::new();
    ctx.insert("film", &film);
    state.views.page("delete_film", &ctx)
}

/// Cascade-delete, then render the remaining films.
pub async fn delete(State(state): State<AppState>, PathParam(id): PathParam<i32>) -> Result<Html<String>, JsonApiError> {
    let films = state.catalog.delete_film(id).await?;
    let mut ctx = Context::new();
    ctx.insert("films", &films);
    Ok(state.views.render("films", &ctx)?)
}

#[utoipa::path(put, path = "/films/{id}", tag = "films", request_body = crate::openapi::UpdateFilmRequest,
    params(("id" = i32, Path, description = "Film id")),
    responses((status = 200, description = "Updated", body = crate::openapi::FilmDoc), (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)))]
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonOrForm(input): JsonOrForm<UpdateFilmInput>,
) -> Result<Json<film::Model>, JsonApiError> {
    Ok(Json(state.catalog.update_film(id, input).await?))
}

#[utoipa::path(get, path = "/films/{id}/actors", tag = "films",
    params(("id" = i32, Path, description = "Film id")),
    responses((status = 200, description = "Links in submission order", body = [crate::openapi::FilmActorDoc]), (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)))]
pub async fn links(State(state): State<AppState>, PathParam(id): PathParam<i32>) -> Result<Json<Vec<film_actor::Model>>, JsonApiError> {
    Ok(Json(state.catalog.film_links(id).await?))
}

#[utoipa::path(post, path = "/films/{id}/actors", tag = "films", request_body = crate::openapi::LinkActorRequest,
    params(("id" = i32, Path, description = "Film id")),
    responses((status = 200, description = "Linked", body = crate::openapi::FilmActorDoc), (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)))]
pub async fn link_actor(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonOrForm(input): JsonOrForm<LinkActorInput>,
) -> Result<Json<film_actor::Model>, JsonApiError> {
    Ok(Json(state.catalog.link_actor(id, input).await?))
}

#[utoipa::path(delete, path = "/films/{id}/actors/{actor_id}", tag = "films",
    params(("id" = i32, Path, description = "Film id"), ("actor_id" = i32, Path, description = "Actor id")),
    responses((status = 200, description = "Unlinked", body = crate::openapi::RemovedResponse), (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)))]
pub async fn unlink_actor(
    State(state): State<AppState>,
    PathParam((id, actor_id)): PathParam<(i32, i32)>,
) -> Result<Json<Removed>, JsonApiError> {
    let removed = state.catalog.unlink_actor(id, actor_id).await?;
    Ok(Json(Removed { removed }))
}
