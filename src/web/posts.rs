//! Post pages
//!
//! Handles HTTP requests for post management:
//! - GET/POST /users/{id}/posts/new - create-post form
//! - GET /posts/{id} - post detail
//! - GET/POST /posts/{id}/edit - edit-post form
//! - POST /posts/{id}/delete - delete post
//!
//! Post forms carry tag checkboxes; the submitted set fully replaces
//! the post's tag associations. `axum_extra`'s Form decodes the
//! repeated `tags` field, which the plain axum extractor cannot.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::models::{CreatePostInput, Post, Tag, UpdatePostInput, User};
use crate::services::PostServiceError;
use crate::web::{AppState, PageError, TeraContext};

/// Submitted post form fields
#[derive(Debug, Default, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<i64>,
}

/// Build the posts router
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/users/{user_id}/posts/new",
            get(new_post_form).post(create_post),
        )
        .route("/posts/{id}", get(show_post))
        .route("/posts/{id}/edit", get(edit_post_form).post(update_post))
        .route("/posts/{id}/delete", post(delete_post))
}

/// GET /users/{user_id}/posts/new - show the create-post form
async fn new_post_form(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let user = state.user_service.get(user_id).await?;
    let tags = state.tag_service.list().await?;

    render_new_form(&state, &user, &tags, &PostForm::default(), "")
}

/// POST /users/{user_id}/posts/new - create a post, or re-show the form
async fn create_post(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Form(form): Form<PostForm>,
) -> Result<Response, PageError> {
    let user = state.user_service.get(user_id).await?;

    let input = CreatePostInput {
        title: form.title.clone(),
        content: form.content.clone(),
        user_id,
        tag_ids: form.tags.clone(),
    };

    match state.post_service.create(input).await {
        Ok(_) => Ok(Redirect::to(&format!("/users/{}", user_id)).into_response()),
        Err(PostServiceError::ValidationError(message)) => {
            let tags = state.tag_service.list().await?;
            Ok(render_new_form(&state, &user, &tags, &form, &message)?.into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// GET /posts/{id} - show a post with its owner and tags
async fn show_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let post = state.post_service.get(id).await?;
    let user = state.user_service.get(post.user_id).await?;
    let tags = state.tag_service.list_for_post(id).await?;

    let mut context = TeraContext::new();
    context.insert("post", &post);
    context.insert("user", &user);
    context.insert("author_name", &user.full_name());
    context.insert("created_label", &format_created(&post));
    context.insert("tags", &tags);

    Ok(Html(state.templates.render("post-info.html", &context)?))
}

/// GET /posts/{id}/edit - show the edit-post form
async fn edit_post_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let post = state.post_service.get(id).await?;
    let tags = state.tag_service.list().await?;
    let checked: Vec<i64> = state
        .tag_service
        .list_for_post(id)
        .await?
        .into_iter()
        .map(|t| t.id)
        .collect();

    let form = PostForm {
        title: post.title,
        content: post.content,
        tags: checked,
    };

    render_edit_form(&state, id, &tags, &form, "")
}

/// POST /posts/{id}/edit - replace title, content, and tag set
async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<PostForm>,
) -> Result<Response, PageError> {
    // Unknown IDs are a 404 regardless of what the form carries
    state.post_service.get(id).await?;

    let input = UpdatePostInput {
        title: form.title.clone(),
        content: form.content.clone(),
        tag_ids: form.tags.clone(),
    };

    match state.post_service.update(id, input).await {
        Ok(post) => Ok(Redirect::to(&format!("/posts/{}", post.id)).into_response()),
        Err(PostServiceError::ValidationError(message)) => {
            let tags = state.tag_service.list().await?;
            Ok(render_edit_form(&state, id, &tags, &form, &message)?.into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// POST /posts/{id}/delete - delete the post, back to its owner's page
async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, PageError> {
    let post = state.post_service.get(id).await?;
    state.post_service.delete(id).await?;

    Ok(Redirect::to(&format!("/users/{}", post.user_id)))
}

fn format_created(post: &Post) -> String {
    post.created_at.format("%b %-d, %Y %-I:%M %p").to_string()
}

fn render_new_form(
    state: &AppState,
    user: &User,
    tags: &[Tag],
    form: &PostForm,
    error: &str,
) -> Result<Html<String>, PageError> {
    let mut context = TeraContext::new();
    context.insert("user", user);
    context.insert("owner_name", &user.full_name());
    context.insert("tags", tags);
    context.insert("checked", &form.tags);
    context.insert("title", &form.title);
    context.insert("content", &form.content);
    context.insert("error", error);

    Ok(Html(state.templates.render("new-post.html", &context)?))
}

fn render_edit_form(
    state: &AppState,
    post_id: i64,
    tags: &[Tag],
    form: &PostForm,
    error: &str,
) -> Result<Html<String>, PageError> {
    let mut context = TeraContext::new();
    context.insert("post_id", &post_id);
    context.insert("tags", tags);
    context.insert("checked", &form.tags);
    context.insert("title", &form.title);
    context.insert("content", &form.content);
    context.insert("error", error);

    Ok(Html(state.templates.render("edit-post.html", &context)?))
}
