use axum::Router;
use common::env::ensure_env;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;
use crate::views::Views;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect, migrate, build the router and serve until Ctrl+C.
///
/// Expects logging to be initialised by the caller.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    ensure_env(&cfg.views.static_dir, &cfg.database.url).await?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::sync_schema(&db).await?;

    let views = Views::load(cfg.views.templates_dir.as_deref()).map_err(StartupError::from)?;
    let app = build_app(AppState::with_db(db, views), &cfg);

    let listener = TcpListener::bind((cfg.server.host.as_str(), cfg.server.port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, database = %cfg.database.url, "film catalog listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}

/// Router for `state` with CORS and the configured static directory.
pub fn build_app(state: AppState, cfg: &AppConfig) -> Router {
    routes::build_router(state, build_cors(), &cfg.views.static_dir)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("received Ctrl+C, draining connections");
    }
}
