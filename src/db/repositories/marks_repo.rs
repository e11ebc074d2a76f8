//! Marks repository

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{db::repositories::MarksSink, error::AppResult, models::ParticipantMarks};

/// PostgreSQL-backed marks sink
pub struct MarksRepository {
    pool: PgPool,
}

impl MarksRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MarksSink for MarksRepository {
    async fn save_marks(&self, marks: &ParticipantMarks) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO marks (participant_id, event_name, scores, total, saved_at)
            VALUES ($1, $2, $3, $4, NOW())
            ON CONFLICT (participant_id, event_name)
            DO UPDATE SET scores = $3, total = $4, saved_at = NOW()
            "#,
        )
        .bind(marks.participant_id)
        .bind(&marks.event_name)
        .bind(&marks.scores)
        .bind(marks.total)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
