//! Results service
//!
//! Final result submission: snapshot the event's draft sheets, rank with
//! competition ranking, and publish the winner batch atomically.

use crate::{
    db::repositories::{ParticipationSource, WinnerStore},
    error::{AppError, AppResult},
    models::Winner,
    scoring::{ScoreSheetStore, WinnerPublisher, rank_participants},
};

/// Results service for ranking and winner publication
pub struct ResultsService;

impl ResultsService {
    /// Finalize an event.
    ///
    /// Ranking is pure and runs on a snapshot of the current sheets, so a
    /// failed publication leaves everything recomputable: calling this
    /// again with unchanged sheets submits the identical batch.
    pub async fn finalize(
        source: &dyn ParticipationSource,
        winner_store: &dyn WinnerStore,
        store: &ScoreSheetStore,
        event_name: &str,
    ) -> AppResult<Vec<Winner>> {
        if source.event_criteria(event_name).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Event '{}' not found",
                event_name
            )));
        }

        let participants = source.attended_participants(event_name).await?;
        let totals = store.totals(event_name).await;

        let winners = rank_participants(event_name, &participants, &totals);

        tracing::info!(
            event = %event_name,
            ranked = participants.len(),
            winners = winners.len(),
            "Computed final ranking"
        );

        WinnerPublisher::publish(winner_store, event_name, &winners).await?;

        Ok(winners)
    }

    /// Published winner list for an event (empty when nothing published)
    pub async fn published_winners(
        winner_store: &dyn WinnerStore,
        event_name: &str,
    ) -> AppResult<Vec<Winner>> {
        winner_store.for_event(event_name).await
    }
}
