//! Persistence collaborators
//!
//! The scoring engine reaches the rest of the campus system only through
//! the three contracts below: a read side for participation data, a
//! per-participant sink for saved marks, and a batch store for published
//! winners. The PostgreSQL repositories in this module are the concrete
//! collaborators; services depend on the traits so the seams can be
//! mocked or swapped.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    error::AppResult,
    models::{Participant, ParticipantMarks, Winner},
    scoring::CriterionCatalog,
};

pub mod marks_repo;
pub mod participation_repo;
pub mod winner_repo;

pub use marks_repo::MarksRepository;
pub use participation_repo::ParticipationRepository;
pub use winner_repo::WinnerRepository;

/// Read side: event criteria, attendance, and previously saved marks.
///
/// Data is handed over as an in-memory snapshot; transport, pagination,
/// and caching are the collaborator's business.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ParticipationSource: Send + Sync {
    /// Criterion catalog from the event record; `None` for unknown events
    async fn event_criteria(&self, event_name: &str) -> AppResult<Option<CriterionCatalog>>;

    /// Participants of the event that actually attended
    async fn attended_participants(&self, event_name: &str) -> AppResult<Vec<Participant>>;

    /// Marks previously saved for the event's participants
    async fn saved_marks(&self, event_name: &str) -> AppResult<Vec<ParticipantMarks>>;
}

/// Write side for one participant's marks (breakdown plus total)
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MarksSink: Send + Sync {
    async fn save_marks(&self, marks: &ParticipantMarks) -> AppResult<()>;
}

/// Write/read side for published winner lists.
///
/// `publish_batch` is all-or-nothing: either every record of the batch
/// persists or none does, and a second publication for the same event is
/// rejected.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WinnerStore: Send + Sync {
    async fn publish_batch(&self, event_name: &str, winners: &[Winner]) -> AppResult<()>;

    async fn for_event(&self, event_name: &str) -> AppResult<Vec<Winner>>;
}
