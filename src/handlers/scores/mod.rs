//! Judge score sheet handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Score sheet routes (nested under /events)
pub fn routes() -> Router<AppState> {
    Router::new()
        // Criterion catalog
        .route("/{event}/criteria", get(handler::get_criteria))
        // Draft sheets
        .route("/{event}/scores", get(handler::list_totals))
        .route("/{event}/scores/load", post(handler::load_sheets))
        .route("/{event}/scores/{participant_id}", get(handler::get_sheet))
        .route("/{event}/scores/{participant_id}", put(handler::set_score))
        // Explicit per-participant save
        .route("/{event}/scores/{participant_id}/save", post(handler::save_marks))
}
