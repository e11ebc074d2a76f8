//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::db::repositories::{
    MarksRepository, MarksSink, ParticipationRepository, ParticipationSource, WinnerRepository,
    WinnerStore,
};
use crate::scoring::ScoreSheetStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Participation data source (event criteria, attendance, saved marks)
    participation: Arc<dyn ParticipationSource>,

    /// Per-participant marks sink
    marks: Arc<dyn MarksSink>,

    /// Published winner store
    winners: Arc<dyn WinnerStore>,

    /// In-memory draft score sheets, keyed by event
    sheets: ScoreSheetStore,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create application state over explicit collaborators
    pub fn new(
        participation: Arc<dyn ParticipationSource>,
        marks: Arc<dyn MarksSink>,
        winners: Arc<dyn WinnerStore>,
        config: Config,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                participation,
                marks,
                winners,
                sheets: ScoreSheetStore::new(),
                config,
            }),
        }
    }

    /// Create application state backed by the PostgreSQL repositories
    pub fn with_postgres(pool: PgPool, config: Config) -> Self {
        Self::new(
            Arc::new(ParticipationRepository::new(pool.clone())),
            Arc::new(MarksRepository::new(pool.clone())),
            Arc::new(WinnerRepository::new(pool)),
            config,
        )
    }

    /// Get the participation data source
    pub fn participation(&self) -> &dyn ParticipationSource {
        self.inner.participation.as_ref()
    }

    /// Get the marks sink
    pub fn marks(&self) -> &dyn MarksSink {
        self.inner.marks.as_ref()
    }

    /// Get the winner store
    pub fn winners(&self) -> &dyn WinnerStore {
        self.inner.winners.as_ref()
    }

    /// Get the draft sheet store
    pub fn sheets(&self) -> &ScoreSheetStore {
        &self.inner.sheets
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
