//! Page error responses
//!
//! Two user-visible failure kinds exist: a missing row (404) and an
//! unexpected internal failure (500). Validation failures never reach
//! this type; handlers re-render the originating form instead.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::services::{PostServiceError, TagServiceError, UserServiceError};

/// Error response rendered as a minimal HTML page
#[derive(Debug)]
pub struct PageError {
    status: StatusCode,
    message: String,
}

impl PageError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: anyhow::Error) -> Self {
        tracing::error!("Internal error: {:#}", err);
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Something went wrong.".to_string(),
        }
    }

    #[cfg(test)]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let title = match self.status {
            StatusCode::NOT_FOUND => "Not Found",
            _ => "Error",
        };
        let body = format!(
            "<!DOCTYPE html>\n<html><head><title>{title}</title></head>\
             <body><h1>{title}</h1><p>{message}</p>\
             <p><a href=\"/users\">Back to users</a></p></body></html>",
            title = title,
            message = self.message,
        );

        (self.status, Html(body)).into_response()
    }
}

impl From<anyhow::Error> for PageError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal(err)
    }
}

impl From<UserServiceError> for PageError {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::NotFound(msg) => Self::not_found(msg),
            UserServiceError::ValidationError(msg) => Self::internal(anyhow::anyhow!(msg)),
            UserServiceError::InternalError(e) => Self::internal(e),
        }
    }
}

impl From<PostServiceError> for PageError {
    fn from(err: PostServiceError) -> Self {
        match err {
            PostServiceError::NotFound(msg) => Self::not_found(msg),
            PostServiceError::ValidationError(msg) => Self::internal(anyhow::anyhow!(msg)),
            PostServiceError::InternalError(e) => Self::internal(e),
        }
    }
}

impl From<TagServiceError> for PageError {
    fn from(err: TagServiceError) -> Self {
        match err {
            TagServiceError::NotFound(msg) => Self::not_found(msg),
            TagServiceError::ValidationError(msg) => Self::internal(anyhow::anyhow!(msg)),
            TagServiceError::InternalError(e) => Self::internal(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let error = PageError::not_found("missing");
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_service_not_found_maps_to_404() {
        let error: PageError = UserServiceError::NotFound("User with ID 7 not found".into()).into();
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
    }
}
