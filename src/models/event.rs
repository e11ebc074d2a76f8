//! Event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Event database model
///
/// Criteria are fixed per event and their order is significant only for
/// display; the index of a label doubles as the criterion index on a
/// score sheet.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub criteria: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Whether the event has any scoring criteria configured
    pub fn is_scorable(&self) -> bool {
        !self.criteria.is_empty()
    }
}
