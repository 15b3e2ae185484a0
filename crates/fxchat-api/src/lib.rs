//! fxchat API crate - axum HTTP server and route handlers.
//!
//! Serves the structured `/convert` endpoint, the free-text `/chat` endpoint,
//! the single-page UI, and small discovery/health endpoints.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
