//! Sentinel server: HTTP surface over the scoring and hardening engine.

pub mod error;
pub mod routes;
pub mod scan;
pub mod state;

pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;
