//! Service layer providing the catalog's business operations on top of models.
//! - Separates business logic (validation, existence checks, cascade policy) from data access.
//! - Reuses entity definitions from the `models` crate.
//! - Persistence is reached only through [`catalog::repository::CatalogRepository`].

pub mod errors;
pub mod catalog;
pub mod db;
#[cfg(test)]
pub mod test_support;
