//! Post repository
//!
//! Database operations for posts.
//!
//! This module provides:
//! - `PostRepository` trait defining the interface for post data access
//! - `SqlxPostRepository` implementing the trait for SQLite
//!
//! Post mutations that touch the join table (create with tags, update
//! with a replacement tag set) run inside a single transaction so the
//! post and its associations commit or roll back together.

use crate::models::{CreatePostInput, Post, UpdatePostInput};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

/// Post repository trait
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Create a new post with its tag associations.
    /// The creation timestamp is assigned by the database.
    async fn create(&self, input: &CreatePostInput) -> Result<Post>;

    /// Get post by ID
    async fn get_by_id(&self, id: i64) -> Result<Option<Post>>;

    /// List a user's posts ordered by creation time, id
    async fn list_by_user_id(&self, user_id: i64) -> Result<Vec<Post>>;

    /// List posts carrying the given tag, ordered by creation time, id
    async fn list_by_tag_id(&self, tag_id: i64) -> Result<Vec<Post>>;

    /// Replace a post's title, content, and full tag set. The owning
    /// user is never changed. Returns None if the ID does not exist.
    async fn update(&self, id: i64, input: &UpdatePostInput) -> Result<Option<Post>>;

    /// Delete a post. Join rows are removed by the schema cascade.
    /// Returns false if the ID does not exist.
    async fn delete(&self, id: i64) -> Result<bool>;
}

/// SQLx-based post repository implementation
pub struct SqlxPostRepository {
    pool: SqlitePool,
}

impl SqlxPostRepository {
    /// Create a new SQLx post repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a boxed repository for use with dependency injection
    pub fn boxed(pool: SqlitePool) -> Arc<dyn PostRepository> {
        Arc::new(Self::new(pool))
    }
}

#[async_trait]
impl PostRepository for SqlxPostRepository {
    async fn create(&self, input: &CreatePostInput) -> Result<Post> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin transaction")?;

        let result = sqlx::query(
            r#"
            INSERT INTO posts (title, content, user_id)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&input.title)
        .bind(&input.content)
        .bind(input.user_id)
        .execute(&mut *tx)
        .await
        .context("Failed to create post")?;

        let id = result.last_insert_rowid();

        for tag_id in &input.tag_ids {
            sqlx::query("INSERT OR IGNORE INTO post_tags (post_id, tag_id) VALUES (?, ?)")
                .bind(id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await
                .context("Failed to add tag to post")?;
        }

        // Re-read within the transaction to pick up the store-assigned timestamp
        let row = sqlx::query(
            r#"
            SELECT id, title, content, created_at, user_id
            FROM posts
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .context("Failed to read back created post")?;

        let post = row_to_post(&row)?;

        tx.commit().await.context("Failed to commit post create")?;

        Ok(post)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Post>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, content, created_at, user_id
            FROM posts
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to get post by ID")?;

        match row {
            Some(row) => Ok(Some(row_to_post(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_by_user_id(&self, user_id: i64) -> Result<Vec<Post>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, content, created_at, user_id
            FROM posts
            WHERE user_id = ?
            ORDER BY created_at, id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list posts by user")?;

        let mut posts = Vec::new();
        for row in rows {
            posts.push(row_to_post(&row)?);
        }

        Ok(posts)
    }

    async fn list_by_tag_id(&self, tag_id: i64) -> Result<Vec<Post>> {
        let rows = sqlx::query(
            r#"
            SELECT p.id, p.title, p.content, p.created_at, p.user_id
            FROM posts p
            INNER JOIN post_tags pt ON p.id = pt.post_id
            WHERE pt.tag_id = ?
            ORDER BY p.created_at, p.id
            "#,
        )
        .bind(tag_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list posts by tag")?;

        let mut posts = Vec::new();
        for row in rows {
            posts.push(row_to_post(&row)?);
        }

        Ok(posts)
    }

    async fn update(&self, id: i64, input: &UpdatePostInput) -> Result<Option<Post>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin transaction")?;

        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = ?, content = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.title)
        .bind(&input.content)
        .bind(id)
        .execute(&mut *tx)
        .await
        .context("Failed to update post")?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        // Full replace of the tag set
        sqlx::query("DELETE FROM post_tags WHERE post_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .context("Failed to clear post tags")?;

        for tag_id in &input.tag_ids {
            sqlx::query("INSERT OR IGNORE INTO post_tags (post_id, tag_id) VALUES (?, ?)")
                .bind(id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await
                .context("Failed to add tag to post")?;
        }

        let row = sqlx::query(
            r#"
            SELECT id, title, content, created_at, user_id
            FROM posts
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .context("Failed to read back updated post")?;

        let post = row_to_post(&row)?;

        tx.commit().await.context("Failed to commit post update")?;

        Ok(Some(post))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        // post_tags rows are deleted automatically via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete post")?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_post(row: &sqlx::sqlite::SqliteRow) -> Result<Post> {
    Ok(Post {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        created_at: row.get("created_at"),
        user_id: row.get("user_id"),
    })
}
