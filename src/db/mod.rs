//! Database layer
//!
//! This module provides database access for the Blogly app. Storage is
//! SQLite for single-binary deployment; connections go through an
//! explicitly constructed pool that is passed into repositories, never
//! a process-wide global.
//!
//! # Usage
//!
//! ```ignore
//! use blogly::config::DatabaseConfig;
//! use blogly::db::{create_pool, migrations};
//!
//! let pool = create_pool(&config).await?;
//! migrations::run_migrations(&pool).await?;
//! ```

pub mod migrations;
pub mod pool;
pub mod repositories;

pub use pool::{create_pool, create_test_pool};
