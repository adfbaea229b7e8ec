//! Handler error type
//!
//! Every handler returns [`AppResult`]. Errors render one of the two error
//! pages; their details go to the log, never to the client.

use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, info};

use crate::render::errors::{not_found_page, server_error_page};

#[derive(Debug, Error)]
pub enum AppError {
    /// Unknown route or missing record (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Form body missing, of the wrong content type or undecodable (500)
    #[error("Unreadable form body: {0}")]
    Form(#[from] FormRejection),

    /// fyyur-common error; `NotFound` maps to 404, everything else to 500
    #[error(transparent)]
    Common(#[from] fyyur_common::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Common(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::NOT_FOUND {
            info!("{}", self);
            (status, Html(not_found_page())).into_response()
        } else {
            error!("Request failed: {}", self);
            (status, Html(server_error_page())).into_response()
        }
    }
}

/// Result type for handlers
pub type AppResult<T> = Result<T, AppError>;
