//! Competition ranking
//!
//! Standard competition ranking ("1224"): participants with equal totals
//! share a rank, and the next distinct (lower) total is ranked one plus
//! the number of participants placed above it. A two-way tie for first
//! is therefore followed by rank 3, never rank 2.

use std::collections::HashMap;

use uuid::Uuid;

use crate::constants::PUBLISHED_RANK_LIMIT;
use crate::models::{Participant, Winner};

/// Rank one event's participants and keep everything at rank 1..=3.
///
/// Only attended participants of `event_name` are considered; a
/// participant without a sheet ranks with a total of 0. Ties are ordered
/// by participant id for reproducibility (the order never changes the
/// rank a tied participant receives). Processing stops at the first
/// participant whose rank would exceed the publish limit, so tie groups
/// are never truncated mid-group and the output can legitimately hold
/// more than three records.
pub fn rank_participants(
    event_name: &str,
    participants: &[Participant],
    totals: &HashMap<Uuid, f64>,
) -> Vec<Winner> {
    let mut entries: Vec<(&Participant, f64)> = participants
        .iter()
        .filter(|p| p.attended && p.event_name == event_name)
        .map(|p| (p, totals.get(&p.id).copied().unwrap_or(0.0)))
        .collect();

    entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.id.cmp(&b.0.id)));

    let mut winners = Vec::new();
    let mut rank: i32 = 1;
    let mut group_size: i32 = 0;
    let mut previous: Option<f64> = None;

    for (participant, total) in entries {
        match previous {
            // Strictly lower total: open a new tie group at the rank that
            // accounts for everyone placed above it
            Some(prev) if total < prev => {
                rank += group_size;
                group_size = 1;
            }
            // First participant, or tied with the previous total
            _ => group_size += 1,
        }
        previous = Some(total);

        if rank > PUBLISHED_RANK_LIMIT {
            break;
        }

        winners.push(Winner {
            name: participant.name.clone(),
            event_name: event_name.to_string(),
            rank,
        });
    }

    winners
}
