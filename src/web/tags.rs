//! Tag pages
//!
//! Handles HTTP requests for tag management:
//! - GET /tags - tag list
//! - GET/POST /tags/new - create-tag form
//! - GET /tags/{id} - tag detail with tagged posts
//! - GET/POST /tags/{id}/edit - edit-tag form
//! - POST /tags/{id}/delete - delete tag (posts are untouched)

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use crate::services::TagServiceError;
use crate::web::{AppState, PageError, TeraContext};

/// Submitted tag form fields
#[derive(Debug, Default, Deserialize)]
pub struct TagForm {
    #[serde(default)]
    pub name: String,
}

/// Build the tags router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tags", get(list_tags))
        .route("/tags/new", get(new_tag_form).post(create_tag))
        .route("/tags/{id}", get(show_tag))
        .route("/tags/{id}/edit", get(edit_tag_form).post(update_tag))
        .route("/tags/{id}/delete", post(delete_tag))
}

/// GET /tags - tag list ordered by name
async fn list_tags(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let tags = state.tag_service.list().await?;

    let mut context = TeraContext::new();
    context.insert("tags", &tags);

    Ok(Html(state.templates.render("tags.html", &context)?))
}

/// GET /tags/new - show the create-tag form
async fn new_tag_form(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    render_new_form(&state, &TagForm::default(), "")
}

/// POST /tags/new - create a tag, or re-show the form with a warning
async fn create_tag(
    State(state): State<AppState>,
    Form(form): Form<TagForm>,
) -> Result<Response, PageError> {
    match state.tag_service.create(&form.name).await {
        Ok(_) => Ok(Redirect::to("/tags").into_response()),
        Err(TagServiceError::ValidationError(message)) => {
            Ok(render_new_form(&state, &form, &message)?.into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// GET /tags/{id} - show a tag and the posts carrying it
async fn show_tag(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let tag = state.tag_service.get(id).await?;
    let posts = state.post_service.list_by_tag(id).await?;

    let mut context = TeraContext::new();
    context.insert("tag", &tag);
    context.insert("posts", &posts);

    Ok(Html(state.templates.render("tag-info.html", &context)?))
}

/// GET /tags/{id}/edit - show the edit-tag form
async fn edit_tag_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let tag = state.tag_service.get(id).await?;
    let form = TagForm { name: tag.name };

    render_edit_form(&state, id, &form, "")
}

/// POST /tags/{id}/edit - rename the tag, or re-show the form
async fn update_tag(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<TagForm>,
) -> Result<Response, PageError> {
    // Unknown IDs are a 404 regardless of what the form carries
    state.tag_service.get(id).await?;

    match state.tag_service.update(id, &form.name).await {
        Ok(tag) => Ok(Redirect::to(&format!("/tags/{}", tag.id)).into_response()),
        Err(TagServiceError::ValidationError(message)) => {
            Ok(render_edit_form(&state, id, &form, &message)?.into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// POST /tags/{id}/delete - delete the tag, back to the tag list
async fn delete_tag(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, PageError> {
    state.tag_service.delete(id).await?;

    Ok(Redirect::to("/tags"))
}

fn render_new_form(
    state: &AppState,
    form: &TagForm,
    error: &str,
) -> Result<Html<String>, PageError> {
    let mut context = TeraContext::new();
    context.insert("name", &form.name);
    context.insert("error", error);

    Ok(Html(state.templates.render("new-tag.html", &context)?))
}

fn render_edit_form(
    state: &AppState,
    tag_id: i64,
    form: &TagForm,
    error: &str,
) -> Result<Html<String>, PageError> {
    let mut context = TeraContext::new();
    context.insert("tag_id", &tag_id);
    context.insert("name", &form.name);
    context.insert("error", error);

    Ok(Html(state.templates.render("edit-tag.html", &context)?))
}
