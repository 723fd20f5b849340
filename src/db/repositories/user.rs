//! User repository
//!
//! Database operations for users.
//!
//! This module provides:
//! - `UserRepository` trait defining the interface for user data access
//! - `SqlxUserRepository` implementing the trait for SQLite

use crate::models::{CreateUserInput, UpdateUserInput, User};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

/// User repository trait
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user
    async fn create(&self, input: &CreateUserInput) -> Result<User>;

    /// Get user by ID
    async fn get_by_id(&self, id: i64) -> Result<Option<User>>;

    /// List all users ordered by last name, first name, id
    async fn list(&self) -> Result<Vec<User>>;

    /// Replace a user's editable fields.
    /// Returns the updated user, or None if the ID does not exist.
    async fn update(&self, id: i64, input: &UpdateUserInput) -> Result<Option<User>>;

    /// Delete a user together with all of their posts in one transaction.
    /// Returns false if the ID does not exist.
    async fn delete(&self, id: i64) -> Result<bool>;
}

/// SQLx-based user repository implementation
pub struct SqlxUserRepository {
    pool: SqlitePool,
}

impl SqlxUserRepository {
    /// Create a new SQLx user repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a boxed repository for use with dependency injection
    pub fn boxed(pool: SqlitePool) -> Arc<dyn UserRepository> {
        Arc::new(Self::new(pool))
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create(&self, input: &CreateUserInput) -> Result<User> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (first_name, last_name, image_url)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.image_url)
        .execute(&self.pool)
        .await
        .context("Failed to create user")?;

        Ok(User {
            id: result.last_insert_rowid(),
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            image_url: input.image_url.clone(),
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, first_name, last_name, image_url
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to get user by ID")?;

        match row {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<User>> {
        let rows = sqlx::query(
            r#"
            SELECT id, first_name, last_name, image_url
            FROM users
            ORDER BY last_name, first_name, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list users")?;

        let mut users = Vec::new();
        for row in rows {
            users.push(row_to_user(&row)?);
        }

        Ok(users)
    }

    async fn update(&self, id: i64, input: &UpdateUserInput) -> Result<Option<User>> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET first_name = ?, last_name = ?, image_url = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.image_url)
        .bind(id)
        .execute(&self.pool)
        .await
        .context("Failed to update user")?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(User {
            id,
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            image_url: input.image_url.clone(),
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        // The user's posts go first; post_tags rows fall out of the
        // posts delete via ON DELETE CASCADE. Single commit so the
        // user never disappears while posts remain.
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin transaction")?;

        sqlx::query("DELETE FROM posts WHERE user_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .context("Failed to delete user's posts")?;

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .context("Failed to delete user")?;

        tx.commit().await.context("Failed to commit user delete")?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> Result<User> {
    Ok(User {
        id: row.get("id"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        image_url: row.get("image_url"),
    })
}
