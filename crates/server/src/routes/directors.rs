use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};
use tera::Context;

use common::types::Message;
use service::catalog::domain::NameInput;

use crate::errors::JsonApiError;
use crate::extract::{JsonOrForm, PathParam};
use crate::state::AppState;
use crate::views::PageError;

pub async fn list(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let directors = state.catalog.list_directors().await.map_err(|e| state.views.error_page(e))?;
    let mut ctx = Context::new();
    ctx.insert("directors", &directors);
    state.views.page("directors", &ctx)
}

pub async fn create(
    State(state): State<AppState>,
    JsonOrForm(input): JsonOrForm<NameInput>,
) -> Result<Redirect, PageError> {
    state.catalog.create_director(input).await.map_err(|e| state.views.error_page(e))?;
    Ok(Redirect::to("/directors"))
}

/// Detail page with the full director list as sidebar.
pub async fn show(State(state): State<AppState>, PathParam(id): PathParam<i32>) -> Result<Html<String>, PageError> {
    let page = state.catalog.director_page(id).await.map_err(|e| state.views.error_page(e))?;
    let mut ctx = Context::new();
    ctx.insert("director", &page.director);
    ctx.insert("directors", &page.directors);
    state.views.page("director", &ctx)
}

pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonOrForm(input): JsonOrForm<NameInput>,
) -> Result<Redirect, PageError> {
    state.catalog.update_director(id, input).await.map_err(|e| state.views.error_page(e))?;
    Ok(Redirect::to(&format!("/directors/{id}")))
}

#[utoipa::path(delete, path = "/directors/{id}", tag = "directors",
    params(("id" = i32, Path, description = "Director id")),
    responses((status = 200, description = "Director, its films and their links removed; unknown ids succeed too", body = crate::openapi::MessageResponse)))]
pub async fn delete(State(state): State<AppState>, PathParam(id): PathParam<i32>) -> Result<Json<Message>, JsonApiError> {
    state.catalog.delete_director(id).await?;
    Ok(Json(Message::ok()))
}
