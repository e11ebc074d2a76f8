//! Participation repository

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    db::repositories::ParticipationSource,
    error::AppResult,
    models::{Event, Participant, ParticipantMarks},
    scoring::CriterionCatalog,
};

/// PostgreSQL-backed participation data source
pub struct ParticipationRepository {
    pool: PgPool,
}

impl ParticipationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an event by name
    pub async fn find_event(&self, event_name: &str) -> AppResult<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(r#"SELECT * FROM events WHERE name = $1"#)
            .bind(event_name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(event)
    }
}

#[async_trait]
impl ParticipationSource for ParticipationRepository {
    async fn event_criteria(&self, event_name: &str) -> AppResult<Option<CriterionCatalog>> {
        let event = self.find_event(event_name).await?;
        Ok(event.map(|e| CriterionCatalog::from(&e)))
    }

    async fn attended_participants(&self, event_name: &str) -> AppResult<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT * FROM participants
            WHERE event_name = $1 AND attended = TRUE
            ORDER BY registered_at
            "#,
        )
        .bind(event_name)
        .fetch_all(&self.pool)
        .await?;

        Ok(participants)
    }

    async fn saved_marks(&self, event_name: &str) -> AppResult<Vec<ParticipantMarks>> {
        let marks = sqlx::query_as::<_, ParticipantMarks>(
            r#"SELECT * FROM marks WHERE event_name = $1"#,
        )
        .bind(event_name)
        .fetch_all(&self.pool)
        .await?;

        Ok(marks)
    }
}
