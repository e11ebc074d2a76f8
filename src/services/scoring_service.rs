//! Scoring service
//!
//! Sheet-level operations for a judge session: catalog lookup, seeding
//! drafts from persisted marks, score entry, totals, and per-participant
//! mark saves.

use chrono::Utc;
use uuid::Uuid;

use crate::{
    db::repositories::{MarksSink, ParticipationSource},
    error::{AppError, AppResult},
    models::{Participant, ParticipantMarks},
    scoring::{CriterionCatalog, ScoreSheet, ScoreSheetStore},
};

/// Scoring service for judge sheet operations
pub struct ScoringService;

impl ScoringService {
    /// Criterion catalog for an event
    pub async fn criteria(
        source: &dyn ParticipationSource,
        event_name: &str,
    ) -> AppResult<CriterionCatalog> {
        source
            .event_criteria(event_name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event '{}' not found", event_name)))
    }

    /// Seed the event's draft sheets from previously saved marks and
    /// return the resulting totals per attended participant.
    pub async fn load_sheets(
        source: &dyn ParticipationSource,
        store: &ScoreSheetStore,
        event_name: &str,
    ) -> AppResult<Vec<(Participant, f64)>> {
        let catalog = Self::criteria(source, event_name).await?;

        let (participants, marks) = futures::future::try_join(
            source.attended_participants(event_name),
            source.saved_marks(event_name),
        )
        .await?;

        store.seed(event_name, catalog.len(), &marks).await;

        tracing::info!(
            event = %event_name,
            participants = participants.len(),
            sheets = marks.len(),
            "Seeded draft sheets from saved marks"
        );

        Self::join_totals(store, event_name, participants).await
    }

    /// Current draft totals per attended participant.
    ///
    /// Participants without a sheet report a total of 0.
    pub async fn sheet_totals(
        source: &dyn ParticipationSource,
        store: &ScoreSheetStore,
        event_name: &str,
    ) -> AppResult<Vec<(Participant, f64)>> {
        // Unknown events 404 before the store is consulted
        Self::criteria(source, event_name).await?;
        let participants = source.attended_participants(event_name).await?;
        Self::join_totals(store, event_name, participants).await
    }

    /// Enter one criterion score for a participant.
    ///
    /// The raw value is sanitized (never rejected); the criterion index
    /// is an address and must fit the event's catalog. Returns the
    /// participant's recomputed total.
    pub async fn enter_score(
        source: &dyn ParticipationSource,
        store: &ScoreSheetStore,
        event_name: &str,
        participant_id: Uuid,
        criterion_index: usize,
        raw: Option<&str>,
    ) -> AppResult<f64> {
        let catalog = Self::criteria(source, event_name).await?;

        if !catalog.contains_index(criterion_index) {
            return Err(AppError::Validation(format!(
                "Criterion index {} is out of range for event '{}' ({} criteria)",
                criterion_index,
                event_name,
                catalog.len()
            )));
        }

        let total = store
            .set_score(event_name, catalog.len(), participant_id, criterion_index, raw)
            .await;

        Ok(total)
    }

    /// One participant's draft sheet; zeroed when nothing has been entered
    pub async fn sheet(
        source: &dyn ParticipationSource,
        store: &ScoreSheetStore,
        event_name: &str,
        participant_id: Uuid,
    ) -> AppResult<ScoreSheet> {
        let catalog = Self::criteria(source, event_name).await?;

        Ok(store
            .sheet(event_name, participant_id)
            .await
            .unwrap_or_else(|| ScoreSheet::new(participant_id, catalog.len())))
    }

    /// Persist one participant's current draft (breakdown plus total)
    pub async fn save_marks(
        sink: &dyn MarksSink,
        store: &ScoreSheetStore,
        event_name: &str,
        participant_id: Uuid,
    ) -> AppResult<ParticipantMarks> {
        let sheet = store.sheet(event_name, participant_id).await.ok_or_else(|| {
            AppError::NotFound(format!(
                "No scores entered for participant {} in event '{}'",
                participant_id, event_name
            ))
        })?;

        let marks = ParticipantMarks {
            participant_id,
            event_name: event_name.to_string(),
            scores: sheet.scores().to_vec(),
            total: sheet.total(),
            saved_at: Utc::now(),
        };

        sink.save_marks(&marks).await?;

        tracing::info!(
            event = %event_name,
            participant = %participant_id,
            total = marks.total,
            "Saved participant marks"
        );

        Ok(marks)
    }

    async fn join_totals(
        store: &ScoreSheetStore,
        event_name: &str,
        participants: Vec<Participant>,
    ) -> AppResult<Vec<(Participant, f64)>> {
        let totals = store.totals(event_name).await;
        Ok(participants
            .into_iter()
            .map(|p| {
                let total = totals.get(&p.id).copied().unwrap_or(0.0);
                (p, total)
            })
            .collect())
    }
}
