//! SeaORM entities for the film catalog.
//!
//! `director` 1:N `film`, and `film` N:M `actor` through `film_actor`.
//! Relations exist only at the entity level; the schema has no foreign keys.

pub mod errors;
pub mod db;
pub mod director;
pub mod film;
pub mod actor;
pub mod film_actor;

#[cfg(test)]
mod tests;
