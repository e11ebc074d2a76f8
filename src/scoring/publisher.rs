//! Winner publication

use crate::{
    db::repositories::WinnerStore,
    error::{AppError, AppResult},
    models::Winner,
};

/// Hands a ranked winner list to the persistence collaborator.
pub struct WinnerPublisher;

impl WinnerPublisher {
    /// Submit the list as one atomic batch.
    ///
    /// A failed submission is surfaced as a recoverable error; nothing in
    /// memory changes, so recomputing the ranking from the same sheets and
    /// resubmitting yields the identical batch. An empty list publishes
    /// nothing and succeeds.
    pub async fn publish(
        store: &dyn WinnerStore,
        event_name: &str,
        winners: &[Winner],
    ) -> AppResult<()> {
        if winners.is_empty() {
            tracing::info!(event = %event_name, "No winners to publish");
            return Ok(());
        }

        match store.publish_batch(event_name, winners).await {
            Ok(()) => {
                tracing::info!(
                    event = %event_name,
                    count = winners.len(),
                    "Published winner batch"
                );
                Ok(())
            }
            // Immutability violations keep their conflict semantics
            Err(err @ (AppError::AlreadyExists(_) | AppError::Conflict(_))) => Err(err),
            Err(err) => {
                tracing::warn!(event = %event_name, error = %err, "Winner submission failed");
                Err(AppError::Submission(err.to_string()))
            }
        }
    }
}
