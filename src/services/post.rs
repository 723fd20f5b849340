//! Post service
//!
//! Implements business logic for post management:
//! - Title and content must both be non-blank on create and edit
//! - Edits replace title, content, and the full tag set; ownership
//!   never changes
//! - The creation timestamp comes from the store, not the caller

use crate::db::repositories::PostRepository;
use crate::models::{CreatePostInput, Post, UpdatePostInput};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Warning shown when title or content is blank
pub const MISSING_FIELDS: &str = "Please fill out all fields";

/// Error types for post service operations
#[derive(Debug, thiserror::Error)]
pub enum PostServiceError {
    /// Post not found
    #[error("Post not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

/// Post service for managing blog posts
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    /// Create a new post service
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Get a post by ID
    ///
    /// # Errors
    /// - `NotFound` if no post has the given ID
    pub async fn get(&self, id: i64) -> Result<Post, PostServiceError> {
        self.repo
            .get_by_id(id)
            .await
            .context("Failed to get post")?
            .ok_or_else(|| PostServiceError::NotFound(format!("Post with ID {} not found", id)))
    }

    /// List a user's posts
    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<Post>, PostServiceError> {
        self.repo
            .list_by_user_id(user_id)
            .await
            .context("Failed to list posts by user")
            .map_err(Into::into)
    }

    /// List posts carrying the given tag
    pub async fn list_by_tag(&self, tag_id: i64) -> Result<Vec<Post>, PostServiceError> {
        self.repo
            .list_by_tag_id(tag_id)
            .await
            .context("Failed to list posts by tag")
            .map_err(Into::into)
    }

    /// Create a new post with its tag associations
    ///
    /// # Errors
    /// - `ValidationError` if title or content is blank
    pub async fn create(&self, input: CreatePostInput) -> Result<Post, PostServiceError> {
        if input.title.trim().is_empty() || input.content.trim().is_empty() {
            return Err(PostServiceError::ValidationError(MISSING_FIELDS.to_string()));
        }

        let created = self
            .repo
            .create(&input)
            .await
            .context("Failed to create post")?;

        tracing::info!(post_id = created.id, user_id = created.user_id, "Created post");

        Ok(created)
    }

    /// Replace a post's title, content, and tag set
    ///
    /// # Errors
    /// - `ValidationError` if title or content is blank
    /// - `NotFound` if no post has the given ID
    pub async fn update(&self, id: i64, input: UpdatePostInput) -> Result<Post, PostServiceError> {
        if input.title.trim().is_empty() || input.content.trim().is_empty() {
            return Err(PostServiceError::ValidationError(MISSING_FIELDS.to_string()));
        }

        self.repo
            .update(id, &input)
            .await
            .context("Failed to update post")?
            .ok_or_else(|| PostServiceError::NotFound(format!("Post with ID {} not found", id)))
    }

    /// Delete a post
    ///
    /// # Errors
    /// - `NotFound` if no post has the given ID
    pub async fn delete(&self, id: i64) -> Result<(), PostServiceError> {
        let deleted = self
            .repo
            .delete(id)
            .await
            .context("Failed to delete post")?;

        if !deleted {
            return Err(PostServiceError::NotFound(format!(
                "Post with ID {} not found",
                id
            )));
        }

        tracing::info!(post_id = id, "Deleted post");

        Ok(())
    }
}
