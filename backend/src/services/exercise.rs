//! Exercise service: logging exercises and querying logs

use crate::error::ApiError;
use crate::repositories::{CreateExercise, ExerciseRepository, UserRecord, UserRepository};
use crate::services::log::LogFilter;
use chrono::{NaiveDate, Utc};
use exercise_tracker_shared::dates;
use exercise_tracker_shared::types::{
    AddExerciseRequest, ExerciseResponse, LogEntry, LogQueryParams, LogResponse,
};
use exercise_tracker_shared::validation;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Exercise service
pub struct ExerciseService;

impl ExerciseService {
    /// Log an exercise against an existing user
    ///
    /// A missing or empty `date` defaults to the current UTC calendar
    /// date at call time.
    pub async fn add_exercise(
        pool: &PgPool,
        user_id: Uuid,
        req: &AddExerciseRequest,
    ) -> Result<ExerciseResponse, ApiError> {
        req.validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        validation::validate_description(&req.description).map_err(ApiError::Validation)?;
        validation::validate_duration(req.duration).map_err(ApiError::Validation)?;

        let user = Self::resolve_user(pool, user_id).await?;

        let date = match req.date.as_deref().map(str::trim) {
            None | Some("") => Utc::now().date_naive(),
            Some(raw) => dates::parse_calendar_date(raw)
                .ok_or_else(|| ApiError::Validation(format!("Invalid date: {}", raw)))?,
        };

        let record = ExerciseRepository::create(
            pool,
            CreateExercise {
                user_id: user.id,
                description: req.description.trim().to_string(),
                duration: req.duration,
                date,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        info!(user_id = %user.id, exercise_id = %record.id, "Exercise logged");

        Ok(ExerciseResponse {
            username: user.username,
            description: record.description,
            duration: record.duration,
            date: dates::format_calendar_date(record.date),
            id: user.id.to_string(),
        })
    }

    /// Produce the filtered, limit-truncated log of a user's exercises
    pub async fn get_log(
        pool: &PgPool,
        user_id: Uuid,
        params: &LogQueryParams,
    ) -> Result<LogResponse, ApiError> {
        let user = Self::resolve_user(pool, user_id).await?;

        let filter = LogFilter {
            from: parse_bound(params.from.as_deref(), "from")?,
            to: parse_bound(params.to.as_deref(), "to")?,
            limit: params.limit.map(|l| l as usize),
        };

        let exercises = ExerciseRepository::find_by_user(pool, user.id)
            .await
            .map_err(ApiError::Internal)?;

        let log: Vec<LogEntry> = filter
            .apply(exercises, |e| e.date)
            .into_iter()
            .map(|e| LogEntry {
                description: e.description,
                duration: e.duration,
                date: dates::format_calendar_date(e.date),
            })
            .collect();

        Ok(LogResponse {
            username: user.username,
            id: user.id.to_string(),
            count: log.len(),
            log,
        })
    }

    async fn resolve_user(pool: &PgPool, user_id: Uuid) -> Result<UserRecord, ApiError> {
        UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    }
}

/// Parse an optional date bound; an unparseable value is rejected rather
/// than silently matching everything.
fn parse_bound(raw: Option<&str>, name: &str) -> Result<Option<NaiveDate>, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => dates::parse_calendar_date(value)
            .map(Some)
            .ok_or_else(|| ApiError::Validation(format!("Invalid '{}' date: {}", name, value))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bound_absent_or_empty() {
        assert_eq!(parse_bound(None, "from").unwrap(), None);
        assert_eq!(parse_bound(Some(""), "from").unwrap(), None);
        assert_eq!(parse_bound(Some("  "), "to").unwrap(), None);
    }

    #[test]
    fn test_parse_bound_valid_date() {
        let bound = parse_bound(Some("2023-01-15"), "from").unwrap();
        assert_eq!(bound, NaiveDate::from_ymd_opt(2023, 1, 15));
    }

    #[test]
    fn test_parse_bound_invalid_date_rejected() {
        let result = parse_bound(Some("next tuesday"), "to");
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
