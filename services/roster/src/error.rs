//! Custom error types for the roster service

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::views::render_error;

/// Custom error type for the roster service
#[derive(Error, Debug)]
pub enum WebError {
    /// The session store rejected a new session
    #[error("Session error: {0}")]
    Session(anyhow::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            WebError::Session(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not start a session. Please try again.",
            ),
        };

        (status, Html(render_error(message))).into_response()
    }
}

/// Type alias for handler results
pub type WebResult<T> = Result<T, WebError>;
