use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod actors;
pub mod directors;
pub mod films;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: catalog pages, JSON endpoints and static assets.
pub fn build_router(state: AppState, cors: CorsLayer, static_dir: &str) -> Router {
    let film_routes = Router::new()
        .route("/films", get(films::list).post(films::create))
        .route("/films/:id", post(films::delete).put(films::update))
        .route("/films/:id/delete", get(films::confirm_delete))
        .route("/films/:id/actors", get(films::links).post(films::link_actor))
        .route("/films/:id/actors/:actor_id", delete(films::unlink_actor));

    let director_routes = Router::new()
        .route("/directors", get(directors::list).post(directors::create))
        .route(
            "/directors/:id",
            get(directors::show).post(directors::update).delete(directors::delete),
        );

    let actor_routes = Router::new()
        .route("/actors", get(actors::list).post(actors::create))
        .route("/actors/:id", post(actors::delete).put(actors::update))
        .route("/actors/:id/delete", get(actors::confirm_delete));

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(film_routes)
        .merge(director_routes)
        .merge(actor_routes)
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
