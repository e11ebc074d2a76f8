//! Participant model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Participant database model
///
/// Only participants with `attended = true` are eligible for scoring and
/// ranking; registration alone is not enough.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Participant {
    pub id: Uuid,
    pub name: String,
    pub event_name: String,
    pub attended: bool,
    pub registered_at: DateTime<Utc>,
}
