use axum::{
    extract::State,
    response::Html,
    Json,
};
use serde::Serialize;
use tera::Context;

use models::actor;
use service::catalog::domain::NameInput;

use crate::errors::JsonApiError;
use crate::extract::{JsonOrForm, PathParam};
use crate::state::AppState;
use crate::views::PageError;

#[derive(Debug, Serialize)]
pub struct ActorEnvelope {
    pub actor: actor::Model,
}

#[utoipa::path(post, path = "/actors", tag = "actors", request_body = crate::openapi::NameRequest,
    responses((status = 200, description = "Created", body = crate::openapi::ActorEnvelopeDoc), (status = 400, description = "Bad Request", body = crate::openapi::ErrorResponse)))]
pub async fn create(
    State(state): State<AppState>,
    JsonOrForm(input): JsonOrForm<NameInput>,
) -> Result<Json<ActorEnvelope>, JsonApiError> {
    let actor = state.catalog.create_actor(input).await?;
    Ok(Json(ActorEnvelope { actor }))
}

pub async fn list(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let actors = state.catalog.list_actors().await.map_err(|e| state.views.error_page(e))?;
    let mut ctx = Context::new();
    ctx.insert("actors", &actors);
    state.views.page("actors", &ctx)
}

pub async fn confirm_delete(State(state): State<AppState>, PathParam(id): PathParam<i32>) -> Result<Html<String>, PageError> {
    let actor = state.catalog.get_actor(id).await.map_err(|e| state.views.error_page(e))?;
    let mut ctx = Context::new();
    ctx.insert("actor", &actor);
    state.views.page("delete_actor", &ctx)
}

pub async fn delete(State(state): State<AppState>, PathParam(id): PathParam<i32>) -> Result<Html<String>, JsonApiError> {
    let actors = state.catalog.delete_actor(id).await?;
    let mut ctx = Context::new();
    ctx.insert("actors", &actors);
    Ok(state.views.render("actors", &ctx)?)
}

pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonOrForm(input): JsonOrForm<NameInput>,
) -> Result<Html<String>, JsonApiError> {
    let listing = state.catalog.update_actor(id, input).await?;
    let mut ctx = Context::new();
    ctx.insert("actor", &listing.actor);
    ctx.insert("actors", &listing.actors);
    Ok(state.views.render("actors_update", &ctx)?)
}
