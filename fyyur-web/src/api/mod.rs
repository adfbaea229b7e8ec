//! HTTP handlers
//!
//! Pages are rendered server side. Handlers map records to views, hand the
//! views to `render`, and convert every failure into a page through
//! [`AppError`](crate::error::AppError).

pub mod artists;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

pub use health::health_routes;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::Uri,
    Form,
};
use chrono::NaiveDateTime;
use serde::{de::DeserializeOwned, Deserialize};

use crate::error::AppError;

/// Number of recent venues and artists on the home page
pub const RECENT_LIMIT: i64 = 10;

/// Reference time for past/upcoming classification
pub(crate) fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Numeric record id from a path segment
pub(crate) fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::NotFound(format!("no record with id {:?}", raw)))
}

/// `application/x-www-form-urlencoded` body
///
/// Same as [`Form`], but a body that cannot be read renders the error page
/// instead of axum's plain-text rejection.
#[derive(Debug)]
pub struct FormBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for FormBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state).await?;
        Ok(FormBody(value))
    }
}

/// Body of the search forms
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri))
}
