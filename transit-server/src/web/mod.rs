//! HTTP layer: router, handlers, shared state, and wire DTOs.

pub mod dto;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
