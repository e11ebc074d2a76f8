//! Score sheet response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Criterion catalog response
#[derive(Debug, Serialize)]
pub struct CriteriaResponse {
    pub event_name: String,
    pub criteria: Vec<String>,
}

/// One participant's draft total
#[derive(Debug, Serialize)]
pub struct ParticipantTotal {
    pub participant_id: Uuid,
    pub name: String,
    pub total: f64,
}

/// Draft totals for every attended participant of an event
#[derive(Debug, Serialize)]
pub struct SheetTotalsResponse {
    pub event_name: String,
    pub totals: Vec<ParticipantTotal>,
}

/// Recomputed total after a score entry
#[derive(Debug, Serialize)]
pub struct ScoreEntryResponse {
    pub participant_id: Uuid,
    pub criterion_index: usize,
    pub total: f64,
}

/// One participant's draft sheet
#[derive(Debug, Serialize)]
pub struct SheetResponse {
    pub participant_id: Uuid,
    pub event_name: String,
    pub scores: Vec<f64>,
    pub total: f64,
}

/// Acknowledgement of a persisted sheet
#[derive(Debug, Serialize)]
pub struct SavedMarksResponse {
    pub participant_id: Uuid,
    pub event_name: String,
    pub total: f64,
    pub saved_at: DateTime<Utc>,
}
