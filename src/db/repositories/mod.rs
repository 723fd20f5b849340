//! Database repositories
//!
//! Repository pattern implementations for database access.
//! Each repository handles CRUD operations for a specific entity.
//! Relationship navigation is explicit (`list_by_user_id`,
//! `list_by_post_id`) rather than lazily loaded from entity fields.

pub mod post;
pub mod tag;
pub mod user;

pub use post::{PostRepository, SqlxPostRepository};
pub use tag::{SqlxTagRepository, TagRepository};
pub use user::{SqlxUserRepository, UserRepository};
