//! Exercise repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Exercise record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExerciseRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    /// Duration in seconds
    pub duration: i32,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Input for creating an exercise
#[derive(Debug, Clone)]
pub struct CreateExercise {
    pub user_id: Uuid,
    pub description: String,
    pub duration: i32,
    pub date: NaiveDate,
}

/// Exercise repository
pub struct ExerciseRepository;

impl ExerciseRepository {
    /// Create a new exercise
    pub async fn create(pool: &PgPool, input: CreateExercise) -> Result<ExerciseRecord> {
        let record = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            INSERT INTO exercises (user_id, description, duration, date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, description, duration, date, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.description)
        .bind(input.duration)
        .bind(input.date)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Fetch all exercises of a user, in insertion order
    pub async fn find_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<ExerciseRecord>> {
        let records = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            SELECT id, user_id, description, duration, date, created_at
            FROM exercises
            WHERE user_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - see backend/tests/
}
