//! Persisted marks model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Persisted form of a participant's score sheet.
///
/// The per-criterion breakdown is stored alongside the derived total so a
/// sheet can be audited later and re-seeded into a judge session.
/// `scores` is ordered by criterion index.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ParticipantMarks {
    pub participant_id: Uuid,
    pub event_name: String,
    pub scores: Vec<f64>,
    pub total: f64,
    pub saved_at: DateTime<Utc>,
}
