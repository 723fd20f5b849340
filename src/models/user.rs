//! User model
//!
//! This module defines the User entity and its input types.
//! A user owns zero or more posts; the posts themselves are reached
//! through explicit repository queries, never through lazy fields.

use serde::{Deserialize, Serialize};

/// User entity representing a profile managed through the site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier (auto-assigned, never reused)
    pub id: i64,
    /// First name (required, non-blank)
    pub first_name: String,
    /// Last name (defaults to empty string)
    pub last_name: String,
    /// Profile image URL (defaults to empty string)
    pub image_url: String,
}

impl User {
    /// Full display name, "First Last" with no trailing space for
    /// users without a last name.
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// Input for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Profile image URL
    pub image_url: String,
}

/// Input for updating a user.
///
/// Edits replace all three editable fields at once; there is no
/// partial-patch semantics.
#[derive(Debug, Clone)]
pub struct UpdateUserInput {
    /// New first name
    pub first_name: String,
    /// New last name
    pub last_name: String,
    /// New profile image URL
    pub image_url: String,
}
