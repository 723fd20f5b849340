//! Data models
//!
//! This module contains all data structures used throughout the Blogly app.
//! Models represent:
//! - Database entities (User, Post, Tag)
//! - Create/update input types carried from forms to repositories

mod post;
mod tag;
mod user;

pub use post::{CreatePostInput, Post, UpdatePostInput};
pub use tag::Tag;
pub use user::{CreateUserInput, UpdateUserInput, User};
