//! User pages
//!
//! Handles HTTP requests for user management:
//! - GET /users - user list
//! - GET/POST /users/new - create-user form
//! - GET /users/{id} - user detail with their posts
//! - GET/POST /users/{id}/edit - edit-user form
//! - POST /users/{id}/delete - delete user and their posts

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use crate::models::{CreateUserInput, UpdateUserInput};
use crate::services::UserServiceError;
use crate::web::{AppState, PageError, TeraContext};

/// Submitted user form fields
#[derive(Debug, Default, Deserialize)]
pub struct UserForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub image_url: String,
}

/// Build the users router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/new", get(new_user_form).post(create_user))
        .route("/users/{id}", get(show_user))
        .route("/users/{id}/edit", get(edit_user_form).post(update_user))
        .route("/users/{id}/delete", post(delete_user))
}

/// GET /users - user list ordered by last name, first name
async fn list_users(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let users = state.user_service.list().await?;

    let mut context = TeraContext::new();
    context.insert("users", &users);

    Ok(Html(state.templates.render("users.html", &context)?))
}

/// GET /users/new - show the create-user form
async fn new_user_form(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    render_new_form(&state, &UserForm::default(), "")
}

/// POST /users/new - create a user, or re-show the form with a warning
async fn create_user(
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> Result<Response, PageError> {
    let input = CreateUserInput {
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        image_url: form.image_url.clone(),
    };

    match state.user_service.create(input).await {
        Ok(_) => Ok(Redirect::to("/users").into_response()),
        Err(UserServiceError::ValidationError(message)) => {
            Ok(render_new_form(&state, &form, &message)?.into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// GET /users/{id} - show a user and their posts
async fn show_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let user = state.user_service.get(id).await?;
    let posts = state.post_service.list_by_user(id).await?;

    let mut context = TeraContext::new();
    context.insert("user", &user);
    context.insert("full_name", &user.full_name());
    context.insert("posts", &posts);

    Ok(Html(state.templates.render("user-info.html", &context)?))
}

/// GET /users/{id}/edit - show the edit-user form
async fn edit_user_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let user = state.user_service.get(id).await?;
    let form = UserForm {
        first_name: user.first_name,
        last_name: user.last_name,
        image_url: user.image_url,
    };

    render_edit_form(&state, id, &form, "")
}

/// POST /users/{id}/edit - replace the user's fields, or re-show the form
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<UserForm>,
) -> Result<Response, PageError> {
    // Unknown IDs are a 404 regardless of what the form carries
    state.user_service.get(id).await?;

    let input = UpdateUserInput {
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        image_url: form.image_url.clone(),
    };

    match state.user_service.update(id, input).await {
        Ok(user) => Ok(Redirect::to(&format!("/users/{}", user.id)).into_response()),
        Err(UserServiceError::ValidationError(message)) => {
            Ok(render_edit_form(&state, id, &form, &message)?.into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// POST /users/{id}/delete - delete the user and all of their posts
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, PageError> {
    state.user_service.delete(id).await?;

    Ok(Redirect::to("/users"))
}

fn render_new_form(
    state: &AppState,
    form: &UserForm,
    error: &str,
) -> Result<Html<String>, PageError> {
    let mut context = TeraContext::new();
    context.insert("first_name", &form.first_name);
    context.insert("last_name", &form.last_name);
    context.insert("image_url", &form.image_url);
    context.insert("error", error);

    Ok(Html(state.templates.render("new-user.html", &context)?))
}

fn render_edit_form(
    state: &AppState,
    user_id: i64,
    form: &UserForm,
    error: &str,
) -> Result<Html<String>, PageError> {
    let mut context = TeraContext::new();
    context.insert("user_id", &user_id);
    context.insert("first_name", &form.first_name);
    context.insert("last_name", &form.last_name);
    context.insert("image_url", &form.image_url);
    context.insert("error", error);

    Ok(Html(state.templates.render("edit-user.html", &context)?))
}

#[cfg(test)]
mod tests {
    use crate::models::{CreatePostInput, CreateUserInput};
    use crate::web::testutil::test_server;
    use crate::web::AppState;
    use axum::http::StatusCode;

    async fn seed_user(state: &AppState, first: &str, last: &str) -> i64 {
        state
            .user_service
            .create(CreateUserInput {
                first_name: first.to_string(),
                last_name: last.to_string(),
                image_url: String::new(),
            })
            .await
            .expect("Failed to seed user")
            .id
    }

    #[tokio::test]
    async fn test_users_page_lists_users() {
        let (server, state) = test_server().await;
        seed_user(&state, "TestUser", "TestLast").await;

        let resp = server.get("/users").await;

        resp.assert_status_ok();
        let html = resp.text();
        assert!(html.contains("TestUser"));
        assert!(html.contains("id=\"users-list\""));
    }

    #[tokio::test]
    async fn test_create_user_redirects_to_list() {
        let (server, _state) = test_server().await;

        let resp = server
            .post("/users/new")
            .form(&[
                ("first_name", "Lucas"),
                ("last_name", "Paga"),
                ("image_url", ""),
            ])
            .await;

        resp.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(resp.header("location"), "/users");

        let list = server.get("/users").await;
        list.assert_status_ok();
        let html = list.text();
        assert!(html.contains("Lucas"));
        assert!(html.contains("id=\"users-list\""));
    }

    #[tokio::test]
    async fn test_create_user_blank_first_name_reshows_form() {
        let (server, state) = test_server().await;

        let resp = server
            .post("/users/new")
            .form(&[("first_name", ""), ("last_name", "Paga"), ("image_url", "")])
            .await;

        resp.assert_status_ok();
        assert!(resp.text().contains("Please enter a first name."));

        // Nothing was persisted
        assert!(state.user_service.list().await.unwrap().is_empty());
        assert!(!server.get("/users").await.text().contains("Paga"));
    }

    #[tokio::test]
    async fn test_show_user() {
        let (server, state) = test_server().await;
        let id = seed_user(&state, "TestUser", "TestLast").await;

        let resp = server.get(&format!("/users/{}", id)).await;

        resp.assert_status_ok();
        let html = resp.text();
        assert!(html.contains("TestUser TestLast"));
        assert!(html.contains("id=\"user-info\""));
    }

    #[tokio::test]
    async fn test_show_user_not_found() {
        let (server, _state) = test_server().await;

        let resp = server.get("/users/999").await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_edit_user_form_shows_current_values() {
        let (server, state) = test_server().await;
        let id = seed_user(&state, "TestUser", "TestLast").await;

        let resp = server.get(&format!("/users/{}/edit", id)).await;

        resp.assert_status_ok();
        assert!(resp.text().contains("TestUser"));
    }

    #[tokio::test]
    async fn test_edit_user_replaces_fields() {
        let (server, state) = test_server().await;
        let id = seed_user(&state, "TestUser", "TestLast").await;

        let resp = server
            .post(&format!("/users/{}/edit", id))
            .form(&[
                ("first_name", "Jonathan"),
                ("last_name", "Pagac"),
                ("image_url", ""),
            ])
            .await;

        resp.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(resp.header("location"), format!("/users/{}", id).as_str());

        let detail = server.get(&format!("/users/{}", id)).await;
        detail.assert_status_ok();
        let html = detail.text();
        assert!(html.contains("Jonathan"));
        assert!(html.contains("Pagac"));
        assert!(html.contains("id=\"user-info\""));
        assert!(!html.contains("TestUser"));
    }

    #[tokio::test]
    async fn test_edit_user_blank_first_name_reshows_form() {
        let (server, state) = test_server().await;
        let id = seed_user(&state, "TestUser", "TestLast").await;

        let resp = server
            .post(&format!("/users/{}/edit", id))
            .form(&[("first_name", " "), ("last_name", ""), ("image_url", "")])
            .await;

        resp.assert_status_ok();
        assert!(resp.text().contains("Please enter a first name."));
        assert_eq!(
            state.user_service.get(id).await.unwrap().first_name,
            "TestUser"
        );
    }

    #[tokio::test]
    async fn test_edit_user_not_found() {
        let (server, _state) = test_server().await;

        let resp = server
            .post("/users/999/edit")
            .form(&[("first_name", "Ghost"), ("last_name", ""), ("image_url", "")])
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_user_removes_user_and_posts() {
        let (server, state) = test_server().await;
        let id = seed_user(&state, "TestUser", "TestLast").await;
        let post = state
            .post_service
            .create(CreatePostInput {
                title: "Doomed post".to_string(),
                content: "Content".to_string(),
                user_id: id,
                tag_ids: vec![],
            })
            .await
            .expect("Failed to seed post");

        let resp = server.post(&format!("/users/{}/delete", id)).await;

        resp.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(resp.header("location"), "/users");

        let list = server.get("/users").await;
        list.assert_status_ok();
        assert!(!list.text().contains("TestUser"));

        server
            .get(&format!("/posts/{}", post.id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let (server, _state) = test_server().await;

        let resp = server.post("/users/999/delete").await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }
}
