//! User service
//!
//! Implements business logic for user management:
//! - First name must be non-blank on create and on every edit
//! - Edits replace all three editable fields
//! - Deleting a user removes the user and all of their posts

use crate::db::repositories::UserRepository;
use crate::models::{CreateUserInput, UpdateUserInput, User};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Warning shown when the first name is blank
pub const MISSING_FIRST_NAME: &str = "Please enter a first name.";

/// Error types for user service operations
#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    /// User not found
    #[error("User not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

/// User service for managing user profiles
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    /// Create a new user service
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// List all users in display order (last name, first name, id)
    pub async fn list(&self) -> Result<Vec<User>, UserServiceError> {
        self.repo
            .list()
            .await
            .context("Failed to list users")
            .map_err(Into::into)
    }

    /// Get a user by ID
    ///
    /// # Errors
    /// - `NotFound` if no user has the given ID
    pub async fn get(&self, id: i64) -> Result<User, UserServiceError> {
        self.repo
            .get_by_id(id)
            .await
            .context("Failed to get user")?
            .ok_or_else(|| UserServiceError::NotFound(format!("User with ID {} not found", id)))
    }

    /// Create a new user
    ///
    /// # Errors
    /// - `ValidationError` if the first name is blank
    pub async fn create(&self, input: CreateUserInput) -> Result<User, UserServiceError> {
        if input.first_name.trim().is_empty() {
            return Err(UserServiceError::ValidationError(
                MISSING_FIRST_NAME.to_string(),
            ));
        }

        let created = self
            .repo
            .create(&input)
            .await
            .context("Failed to create user")?;

        tracing::info!(user_id = created.id, "Created user");

        Ok(created)
    }

    /// Replace a user's editable fields
    ///
    /// # Errors
    /// - `ValidationError` if the first name is blank
    /// - `NotFound` if no user has the given ID
    pub async fn update(&self, id: i64, input: UpdateUserInput) -> Result<User, UserServiceError> {
        if input.first_name.trim().is_empty() {
            return Err(UserServiceError::ValidationError(
                MISSING_FIRST_NAME.to_string(),
            ));
        }

        self.repo
            .update(id, &input)
            .await
            .context("Failed to update user")?
            .ok_or_else(|| UserServiceError::NotFound(format!("User with ID {} not found", id)))
    }

    /// Delete a user and all of their posts
    ///
    /// # Errors
    /// - `NotFound` if no user has the given ID
    pub async fn delete(&self, id: i64) -> Result<(), UserServiceError> {
        let deleted = self
            .repo
            .delete(id)
            .await
            .context("Failed to delete user")?;

        if !deleted {
            return Err(UserServiceError::NotFound(format!(
                "User with ID {} not found",
                id
            )));
        }

        tracing::info!(user_id = id, "Deleted user and their posts");

        Ok(())
    }
}
