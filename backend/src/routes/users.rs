//! User and exercise log routes

use crate::error::{ApiError, ApiResult};
use crate::services::{ExerciseService, UserService};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use exercise_tracker_shared::types::{
    AddExerciseRequest, CreateUserRequest, ExerciseResponse, LogQueryParams, LogResponse,
    UserResponse,
};
use uuid::Uuid;

/// POST /api/users - create a user
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::create_user(state.db(), &req).await?;
    Ok(Json(user))
}

/// GET /api/users - list all users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = UserService::list_users(state.db()).await?;
    Ok(Json(users))
}

/// POST /api/users/:id/exercises - log an exercise against a user
pub async fn add_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AddExerciseRequest>,
) -> ApiResult<Json<ExerciseResponse>> {
    let user_id = parse_user_id(&id)?;
    let exercise = ExerciseService::add_exercise(state.db(), user_id, &req).await?;
    Ok(Json(exercise))
}

/// GET /api/users/:id/logs - filtered, limit-truncated exercise log
pub async fn get_logs(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<LogQueryParams>,
) -> ApiResult<Json<LogResponse>> {
    let user_id = parse_user_id(&id)?;
    let log = ExerciseService::get_log(state.db(), user_id, &params).await?;
    Ok(Json(log))
}

fn parse_user_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::Validation("Invalid user ID".to_string()))
}
