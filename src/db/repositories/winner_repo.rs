//! Winner repository

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    db::repositories::WinnerStore,
    error::{AppError, AppResult},
    models::Winner,
};

/// PostgreSQL-backed winner store
pub struct WinnerRepository {
    pool: PgPool,
}

impl WinnerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WinnerStore for WinnerRepository {
    /// Persist a winner batch inside one transaction.
    ///
    /// Published winners are immutable: if the event already has records,
    /// the whole batch is rejected and nothing is written.
    async fn publish_batch(&self, event_name: &str, winners: &[Winner]) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let already_published: bool = sqlx::query_scalar(
            r#"SELECT EXISTS(SELECT 1 FROM winners WHERE event_name = $1)"#,
        )
        .bind(event_name)
        .fetch_one(&mut *tx)
        .await?;

        if already_published {
            return Err(AppError::AlreadyExists(format!(
                "Winners already published for event '{}'",
                event_name
            )));
        }

        for winner in winners {
            sqlx::query(
                r#"
                INSERT INTO winners (name, event_name, rank, published_at)
                VALUES ($1, $2, $3, NOW())
                "#,
            )
            .bind(&winner.name)
            .bind(&winner.event_name)
            .bind(winner.rank)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    async fn for_event(&self, event_name: &str) -> AppResult<Vec<Winner>> {
        let winners = sqlx::query_as::<_, Winner>(
            r#"
            SELECT name, event_name, rank FROM winners
            WHERE event_name = $1
            ORDER BY rank, name
            "#,
        )
        .bind(event_name)
        .fetch_all(&self.pool)
        .await?;

        Ok(winners)
    }
}
