//! Shared test fixtures
//!
//! In-memory collaborator fakes and a pre-wired application state for
//! router-level tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    config::{Config, DatabaseConfig, ServerConfig},
    db::repositories::{MarksSink, ParticipationSource, WinnerStore},
    error::{AppError, AppResult},
    models::{Participant, ParticipantMarks, Winner},
    scoring::CriterionCatalog,
    state::AppState,
};

pub(crate) fn participant(name: &str, event_name: &str) -> Participant {
    Participant {
        id: Uuid::new_v4(),
        name: name.to_string(),
        event_name: event_name.to_string(),
        attended: true,
        registered_at: Utc::now(),
    }
}

/// In-memory participation source with a single event
pub(crate) struct FakeParticipation {
    event_name: String,
    criteria: Vec<String>,
    participants: Vec<Participant>,
    pub marks: Vec<ParticipantMarks>,
}

#[async_trait]
impl ParticipationSource for FakeParticipation {
    async fn event_criteria(&self, event_name: &str) -> AppResult<Option<CriterionCatalog>> {
        Ok((event_name == self.event_name)
            .then(|| CriterionCatalog::new(self.criteria.clone())))
    }

    async fn attended_participants(&self, event_name: &str) -> AppResult<Vec<Participant>> {
        Ok(self
            .participants
            .iter()
            .filter(|p| p.event_name == event_name && p.attended)
            .cloned()
            .collect())
    }

    async fn saved_marks(&self, event_name: &str) -> AppResult<Vec<ParticipantMarks>> {
        Ok(self
            .marks
            .iter()
            .filter(|m| m.event_name == event_name)
            .cloned()
            .collect())
    }
}

/// Marks sink that records every save
#[derive(Default)]
pub(crate) struct FakeMarksSink {
    pub saved: Mutex<Vec<ParticipantMarks>>,
}

#[async_trait]
impl MarksSink for FakeMarksSink {
    async fn save_marks(&self, marks: &ParticipantMarks) -> AppResult<()> {
        self.saved.lock().await.push(marks.clone());
        Ok(())
    }
}

/// Winner store with the same immutability contract as the repository
#[derive(Default)]
pub(crate) struct FakeWinnerStore {
    pub published: Mutex<HashMap<String, Vec<Winner>>>,
}

#[async_trait]
impl WinnerStore for FakeWinnerStore {
    async fn publish_batch(&self, event_name: &str, winners: &[Winner]) -> AppResult<()> {
        let mut published = self.published.lock().await;
        if published.contains_key(event_name) {
            return Err(AppError::AlreadyExists(format!(
                "Winners already published for event '{}'",
                event_name
            )));
        }
        published.insert(event_name.to_string(), winners.to_vec());
        Ok(())
    }

    async fn for_event(&self, event_name: &str) -> AppResult<Vec<Winner>> {
        let published = self.published.lock().await;
        let mut winners = published.get(event_name).cloned().unwrap_or_default();
        winners.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.name.cmp(&b.name)));
        Ok(winners)
    }
}

fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "warn".to_string(),
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
        },
    }
}

/// Application state wired to in-memory fakes
pub(crate) struct TestHarness {
    pub state: AppState,
    pub marks: Arc<FakeMarksSink>,
    pub winners: Arc<FakeWinnerStore>,
}

impl TestHarness {
    pub fn new(event_name: &str, criteria: &[&str], participants: Vec<Participant>) -> Self {
        Self::with_marks(event_name, criteria, participants, vec![])
    }

    pub fn with_marks(
        event_name: &str,
        criteria: &[&str],
        participants: Vec<Participant>,
        marks: Vec<ParticipantMarks>,
    ) -> Self {
        let participation = Arc::new(FakeParticipation {
            event_name: event_name.to_string(),
            criteria: criteria.iter().map(|c| c.to_string()).collect(),
            participants,
            marks,
        });
        let marks_sink = Arc::new(FakeMarksSink::default());
        let winner_store = Arc::new(FakeWinnerStore::default());

        let state = AppState::new(
            participation,
            marks_sink.clone(),
            winner_store.clone(),
            test_config(),
        );

        Self {
            state,
            marks: marks_sink,
            winners: winner_store,
        }
    }

    /// Fresh router over the shared state
    pub fn router(&self) -> Router {
        crate::handlers::routes().with_state(self.state.clone())
    }
}
