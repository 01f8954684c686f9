//! User service for account creation and listing

use crate::error::ApiError;
use crate::repositories::UserRepository;
use exercise_tracker_shared::types::{CreateUserRequest, UserResponse};
use exercise_tracker_shared::validation;
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

/// User service
pub struct UserService;

impl UserService {
    /// Create a new user with a unique username
    pub async fn create_user(
        pool: &PgPool,
        req: &CreateUserRequest,
    ) -> Result<UserResponse, ApiError> {
        req.validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let username = req.username.trim();
        validation::validate_username(username).map_err(ApiError::Validation)?;

        // Uniqueness is also backed by the UNIQUE constraint on the table
        if UserRepository::username_exists(pool, username)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict("Username already taken".to_string()));
        }

        let user = UserRepository::create(pool, username)
            .await
            .map_err(ApiError::Internal)?;

        info!(user_id = %user.id, "User created");

        Ok(UserResponse {
            username: user.username,
            id: user.id.to_string(),
        })
    }

    /// List every stored user in insertion order
    pub async fn list_users(pool: &PgPool) -> Result<Vec<UserResponse>, ApiError> {
        let users = UserRepository::list(pool)
            .await
            .map_err(ApiError::Internal)?;

        Ok(users
            .into_iter()
            .map(|u| UserResponse {
                username: u.username,
                id: u.id.to_string(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - see backend/tests/
}
