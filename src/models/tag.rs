//! Tag model
//!
//! This module defines the Tag entity. Tags are reusable labels joined
//! to posts through the `post_tags` table; the tag name is unique
//! across all tags.

use serde::{Deserialize, Serialize};

/// Tag entity representing a reusable post label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    /// Unique identifier
    pub id: i64,
    /// Tag name (unique)
    pub name: String,
}
