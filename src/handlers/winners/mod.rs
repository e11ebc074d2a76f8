//! Final results and winner handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Winner routes (nested under /events)
pub fn routes() -> Router<AppState> {
    Router::new()
        // Final result submission
        .route("/{event}/results", post(handler::submit_results))
        // Published winners
        .route("/{event}/winners", get(handler::list_winners))
}
