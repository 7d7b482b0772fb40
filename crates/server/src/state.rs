use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::catalog::{repo::seaorm::SeaOrmCatalogRepository, repository::CatalogRepository, DynCatalogService};

use crate::views::Views;

/// Shared router state: the catalog service and the compiled templates.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<DynCatalogService>,
    pub views: Arc<Views>,
}

impl AppState {
    pub fn new(catalog: DynCatalogService, views: Views) -> Self {
        Self { catalog: Arc::new(catalog), views: Arc::new(views) }
    }

    /// State backed by the SeaORM repository on `db`.
    pub fn with_db(db: DatabaseConnection, views: Views) -> Self {
        let repo: Arc<dyn CatalogRepository> = Arc::new(SeaOrmCatalogRepository::new(db));
        Self::new(DynCatalogService::new(repo), views)
    }
}
