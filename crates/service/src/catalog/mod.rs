//! Catalog module: three-layer architecture (domain, repository, service).
//!
//! Films, directors, actors and the film ↔ actor links. Cascade rules live in
//! the repository implementations so each policy is defined exactly once.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::{CatalogService, DynCatalogService};
