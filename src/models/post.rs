//! Post model
//!
//! This module provides:
//! - `Post` entity representing a blog post owned by a user
//! - Input types for creating and updating posts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    /// Unique identifier
    pub id: i64,
    /// Post title
    pub title: String,
    /// Post content (free text, unbounded)
    pub content: String,
    /// Creation timestamp, assigned by the database at insert time
    pub created_at: DateTime<Utc>,
    /// Owning user ID (immutable after creation)
    pub user_id: i64,
}

/// Input for creating a new post
#[derive(Debug, Clone)]
pub struct CreatePostInput {
    /// Post title
    pub title: String,
    /// Post content
    pub content: String,
    /// Owning user ID
    pub user_id: i64,
    /// Tags to associate with the post
    pub tag_ids: Vec<i64>,
}

/// Input for updating an existing post.
///
/// Edits replace title and content and the full tag set; the owning
/// user never changes.
#[derive(Debug, Clone)]
pub struct UpdatePostInput {
    /// New title
    pub title: String,
    /// New content
    pub content: String,
    /// Full replacement tag set
    pub tag_ids: Vec<i64>,
}
