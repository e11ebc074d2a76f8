//! Winner response DTOs

use serde::Serialize;

use crate::models::Winner;

/// Winner list for one event
#[derive(Debug, Serialize)]
pub struct WinnersResponse {
    pub event_name: String,
    pub winners: Vec<Winner>,
}
