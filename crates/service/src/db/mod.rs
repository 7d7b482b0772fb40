//! SeaORM-backed catalog operations as free functions.
//!
//! Functions taking a generic `ConnectionTrait` also run inside a caller's
//! transaction; those taking `&DatabaseConnection` open their own.

pub mod film_service;
pub mod director_service;
pub mod actor_service;
pub mod film_actor_service;
