//! Tag service
//!
//! Implements business logic for tag management:
//! - Tag names are required and unique across all tags
//! - `create_or_get` reuses an existing tag instead of duplicating it
//! - Deleting a tag never deletes the posts that carried it

use crate::db::repositories::TagRepository;
use crate::models::Tag;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Warning shown when the tag name is blank
pub const MISSING_TAG_NAME: &str = "Please enter a tag name.";

/// Warning shown when the tag name is already taken
pub const DUPLICATE_TAG_NAME: &str = "Tag name already in use.";

/// Error types for tag service operations
#[derive(Debug, thiserror::Error)]
pub enum TagServiceError {
    /// Tag not found
    #[error("Tag not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

/// Tag service for managing reusable post labels
pub struct TagService {
    repo: Arc<dyn TagRepository>,
}

impl TagService {
    /// Create a new tag service
    pub fn new(repo: Arc<dyn TagRepository>) -> Self {
        Self { repo }
    }

    /// List all tags ordered by name
    pub async fn list(&self) -> Result<Vec<Tag>, TagServiceError> {
        self.repo
            .list()
            .await
            .context("Failed to list tags")
            .map_err(Into::into)
    }

    /// Get a tag by ID
    ///
    /// # Errors
    /// - `NotFound` if no tag has the given ID
    pub async fn get(&self, id: i64) -> Result<Tag, TagServiceError> {
        self.repo
            .get_by_id(id)
            .await
            .context("Failed to get tag")?
            .ok_or_else(|| TagServiceError::NotFound(format!("Tag with ID {} not found", id)))
    }

    /// Get the tags attached to a post
    pub async fn list_for_post(&self, post_id: i64) -> Result<Vec<Tag>, TagServiceError> {
        self.repo
            .list_by_post_id(post_id)
            .await
            .context("Failed to list tags for post")
            .map_err(Into::into)
    }

    /// Create a new tag
    ///
    /// # Errors
    /// - `ValidationError` if the name is blank or already in use
    pub async fn create(&self, name: &str) -> Result<Tag, TagServiceError> {
        let name = self.validate_name(name, None).await?;

        let created = self
            .repo
            .create(&name)
            .await
            .context("Failed to create tag")?;

        tracing::info!(tag_id = created.id, "Created tag");

        Ok(created)
    }

    /// Create a new tag or reuse the existing one with the same name
    ///
    /// # Errors
    /// - `ValidationError` if the name is blank
    pub async fn create_or_get(&self, name: &str) -> Result<Tag, TagServiceError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(TagServiceError::ValidationError(
                MISSING_TAG_NAME.to_string(),
            ));
        }

        if let Some(existing) = self
            .repo
            .get_by_name(trimmed)
            .await
            .context("Failed to check existing tag")?
        {
            return Ok(existing);
        }

        self.repo
            .create(trimmed)
            .await
            .context("Failed to create tag")
            .map_err(Into::into)
    }

    /// Rename a tag
    ///
    /// # Errors
    /// - `ValidationError` if the name is blank or taken by another tag
    /// - `NotFound` if no tag has the given ID
    pub async fn update(&self, id: i64, name: &str) -> Result<Tag, TagServiceError> {
        let name = self.validate_name(name, Some(id)).await?;

        self.repo
            .update(id, &name)
            .await
            .context("Failed to update tag")?
            .ok_or_else(|| TagServiceError::NotFound(format!("Tag with ID {} not found", id)))
    }

    /// Delete a tag, detaching it from all posts
    ///
    /// # Errors
    /// - `NotFound` if no tag has the given ID
    pub async fn delete(&self, id: i64) -> Result<(), TagServiceError> {
        let deleted = self
            .repo
            .delete(id)
            .await
            .context("Failed to delete tag")?;

        if !deleted {
            return Err(TagServiceError::NotFound(format!(
                "Tag with ID {} not found",
                id
            )));
        }

        tracing::info!(tag_id = id, "Deleted tag");

        Ok(())
    }

    /// Trim and check a candidate name; `exclude_id` skips the tag
    /// being renamed in the uniqueness check.
    async fn validate_name(
        &self,
        name: &str,
        exclude_id: Option<i64>,
    ) -> Result<String, TagServiceError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(TagServiceError::ValidationError(
                MISSING_TAG_NAME.to_string(),
            ));
        }

        if let Some(existing) = self
            .repo
            .get_by_name(trimmed)
            .await
            .context("Failed to check existing tag")?
        {
            if exclude_id != Some(existing.id) {
                return Err(TagServiceError::ValidationError(
                    DUPLICATE_TAG_NAME.to_string(),
                ));
            }
        }

        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::SqlxTagRepository;
    use crate::db::{create_test_pool, migrations};

    async fn setup_service() -> TagService {
        let pool = create_test_pool().await.expect("Failed to create test pool");
        migrations::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");
        TagService::new(SqlxTagRepository::boxed(pool))
    }

    #[tokio::test]
    async fn test_create_tag() {
        let service = setup_service().await;

        let tag = service.create("rust").await.expect("Create should succeed");

        assert_eq!(tag.name, "rust");
    }

    #[tokio::test]
    async fn test_create_tag_trims_name() {
        let service = setup_service().await;

        let tag = service.create("  rust  ").await.expect("Create should succeed");

        assert_eq!(tag.name, "rust");
    }

    #[tokio::test]
    async fn test_create_tag_blank_name() {
        let service = setup_service().await;

        let result = service.create("   ").await;

        match result {
            Err(TagServiceError::ValidationError(msg)) => {
                assert_eq!(msg, MISSING_TAG_NAME);
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_tag_duplicate_name() {
        let service = setup_service().await;
        service.create("rust").await.unwrap();

        let result = service.create("rust").await;

        match result {
            Err(TagServiceError::ValidationError(msg)) => {
                assert_eq!(msg, DUPLICATE_TAG_NAME);
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_or_get_reuses_existing() {
        let service = setup_service().await;
        let first = service.create("rust").await.unwrap();

        let second = service.create_or_get("rust").await.expect("Should reuse");

        assert_eq!(second.id, first.id);
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_or_get_creates_missing() {
        let service = setup_service().await;

        let tag = service.create_or_get("new").await.expect("Should create");

        assert_eq!(tag.name, "new");
    }

    #[tokio::test]
    async fn test_get_tag_not_found() {
        let service = setup_service().await;

        let result = service.get(99999).await;

        assert!(matches!(result, Err(TagServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_tag() {
        let service = setup_service().await;
        let tag = service.create("rsut").await.unwrap();

        let updated = service.update(tag.id, "rust").await.expect("Update should succeed");

        assert_eq!(updated.name, "rust");
    }

    #[tokio::test]
    async fn test_update_tag_to_own_name_is_allowed() {
        let service = setup_service().await;
        let tag = service.create("rust").await.unwrap();

        let updated = service.update(tag.id, "rust").await.expect("Rename to self");

        assert_eq!(updated.id, tag.id);
    }

    #[tokio::test]
    async fn test_update_tag_duplicate_name() {
        let service = setup_service().await;
        service.create("rust").await.unwrap();
        let other = service.create("web").await.unwrap();

        let result = service.update(other.id, "rust").await;

        assert!(matches!(result, Err(TagServiceError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_delete_tag() {
        let service = setup_service().await;
        let tag = service.create("doomed").await.unwrap();

        service.delete(tag.id).await.expect("Delete should succeed");

        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_tag_not_found() {
        let service = setup_service().await;

        let result = service.delete(99999).await;

        assert!(matches!(result, Err(TagServiceError::NotFound(_))));
    }
}
