pub mod errors;
pub mod extract;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod state;
pub mod views;

pub use startup::run_with_config;
pub use state::AppState;
