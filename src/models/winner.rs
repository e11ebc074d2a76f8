//! Winner model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A published winner record.
///
/// Produced only by the ranking engine and immutable once published.
/// `rank` is always 1, 2, or 3; ties share a rank, so an event can have
/// more than one record per rank (and may skip rank 2 entirely after a
/// tie for first).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Winner {
    pub name: String,
    pub event_name: String,
    pub rank: i32,
}
