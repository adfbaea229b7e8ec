//! Show handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{error, warn};

use super::home::render_home;
use super::{now, FormBody};
use crate::db::shows::{self, ShowInsertError};
use crate::error::AppResult;
use crate::flash::{Flash, Flashes};
use crate::forms::{FieldErrors, FormData, ShowForm};
use crate::render::shows::{show_form_page, shows_page};
use crate::AppState;

/// GET /shows
pub async fn list_shows(State(state): State<AppState>, flashes: Flashes) -> AppResult<Html<String>> {
    let listings = shows::list_all(&state.db).await?;
    Ok(Html(shows_page(&listings, &flashes.0)))
}

/// GET /shows/create
pub async fn new_show_form() -> Html<String> {
    Html(show_form_page(&ShowForm::empty(now()), &FieldErrors::default()))
}

fn rejected(form: &ShowForm, errors: &FieldErrors) -> Response {
    warn!("Rejected show form: {}", errors.summary());
    (StatusCode::UNPROCESSABLE_ENTITY, Html(show_form_page(form, errors))).into_response()
}

/// POST /shows/create
///
/// A venue or artist id that matches no record is reported against its
/// field, like any other validation failure.
pub async fn create_show(
    State(state): State<AppState>,
    flashes: Flashes,
    FormBody(pairs): FormBody<Vec<(String, String)>>,
) -> AppResult<Response> {
    let form = ShowForm::from_form(&FormData::new(pairs));
    let data = match form.validate() {
        Ok(data) => data,
        Err(errors) => return Ok(rejected(&form, &errors)),
    };

    let outcome = match shows::insert(&state.db, &data).await {
        Ok(_) => Flash::success("Show was successfully listed!"),
        Err(ShowInsertError::UnknownVenue(id)) => {
            let mut errors = FieldErrors::default();
            errors.add("venue_id", format!("No venue with id {}.", id));
            return Ok(rejected(&form, &errors));
        }
        Err(ShowInsertError::UnknownArtist(id)) => {
            let mut errors = FieldErrors::default();
            errors.add("artist_id", format!("No artist with id {}.", id));
            return Ok(rejected(&form, &errors));
        }
        Err(ShowInsertError::Persistence(e)) => {
            error!("Failed to list show: {}", e);
            Flash::error("An error occurred. Show could not be listed.")
        }
    };

    Ok(render_home(&state, &flashes.with(outcome)).await?.into_response())
}
