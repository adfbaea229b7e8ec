//! Venue handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{error, info, warn};

use super::home::render_home;
use super::{now, parse_id, FormBody, SearchForm};
use crate::db::{shows, venues};
use crate::error::{AppError, AppResult};
use crate::flash::{redirect_with_flash, Flash, Flashes};
use crate::forms::{FormData, VenueForm};
use crate::render::fields::FormMode;
use crate::render::search::{search_page, SearchKind};
use crate::render::venues::{venue_form_page, venue_page, venues_page};
use crate::views::{group_by_area, search_results, VenueDetail};
use crate::AppState;

/// GET /venues
pub async fn list_venues(State(state): State<AppState>, flashes: Flashes) -> AppResult<Html<String>> {
    let areas = venues::distinct_areas(&state.db).await?;
    let all = venues::list_all(&state.db).await?;
    let ids: Vec<i64> = all.iter().map(|v| v.id).collect();
    let shows_by_venue = shows::for_venues(&state.db, &ids).await?;

    let grouped = group_by_area(&areas, &all, &shows_by_venue, now());
    Ok(Html(venues_page(&grouped, &flashes.0)))
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    FormBody(search): FormBody<SearchForm>,
) -> AppResult<Html<String>> {
    let matches = venues::search_by_name(&state.db, &search.search_term).await?;
    let ids: Vec<i64> = matches.iter().map(|v| v.id).collect();
    let shows_by_venue = shows::for_venues(&state.db, &ids).await?;

    let results = search_results(&matches, &shows_by_venue, now());
    info!("Venue search {:?} matched {}", search.search_term, results.count);
    Ok(Html(search_page(SearchKind::Venues, &search.search_term, &results)))
}

/// GET /venues/:id
pub async fn show_venue(
    State(state): State<AppState>,
    flashes: Flashes,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_id(&id)?;
    let venue = venues::find(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("venue {}", id)))?;
    let venue_shows = shows::for_venue(&state.db, id).await?;

    let detail = VenueDetail::new(&venue, &venue_shows, now());
    Ok(Html(venue_page(&detail, &flashes.0)))
}

/// GET /venues/create
pub async fn new_venue_form() -> Html<String> {
    Html(venue_form_page(&VenueForm::default(), &Default::default(), FormMode::Create))
}

/// POST /venues/create
pub async fn create_venue(
    State(state): State<AppState>,
    flashes: Flashes,
    FormBody(pairs): FormBody<Vec<(String, String)>>,
) -> AppResult<Response> {
    let form = VenueForm::from_form(&FormData::new(pairs));
    let data = match form.validate() {
        Ok(data) => data,
        Err(errors) => {
            warn!("Rejected venue form: {}", errors.summary());
            let page = venue_form_page(&form, &errors, FormMode::Create);
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response());
        }
    };

    let outcome = match venues::insert(&state.db, &data).await {
        Ok(_) => Flash::success(format!("Venue {} was successfully listed!", data.name)),
        Err(e) => {
            error!("Failed to list venue {}: {}", data.name, e);
            Flash::error(format!("An error occurred. Venue {} could not be listed.", data.name))
        }
    };

    Ok(render_home(&state, &flashes.with(outcome)).await?.into_response())
}

/// GET /venues/:id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_id(&id)?;
    let venue = venues::find(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("venue {}", id)))?;

    let form = VenueForm::from_venue(&venue);
    Ok(Html(venue_form_page(&form, &Default::default(), FormMode::Edit(id))))
}

/// POST /venues/:id/edit
///
/// Overwrites every editable attribute, then redirects to the venue page.
pub async fn update_venue(
    State(state): State<AppState>,
    Path(id): Path<String>,
    FormBody(pairs): FormBody<Vec<(String, String)>>,
) -> AppResult<Response> {
    let id = parse_id(&id)?;
    if venues::find(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound(format!("venue {}", id)));
    }

    let form = VenueForm::from_form(&FormData::new(pairs));
    let data = match form.validate() {
        Ok(data) => data,
        Err(errors) => {
            warn!("Rejected edit of venue {}: {}", id, errors.summary());
            let page = venue_form_page(&form, &errors, FormMode::Edit(id));
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response());
        }
    };

    let outcome = match venues::update(&state.db, id, &data).await {
        Ok(()) => Flash::success(format!("Venue {} was successfully updated!", data.name)),
        Err(e) if e.is_not_found() => return Err(e.into()),
        Err(e) => {
            error!("Failed to update venue {}: {}", id, e);
            Flash::error(format!("An error occurred. Venue {} could not be updated.", data.name))
        }
    };

    let location = format!("/venues/{}", id);
    Ok(redirect_with_flash(&state.config.secret_key, &location, &[outcome]))
}

/// DELETE /venues/:id
///
/// Any failure, an unknown id included, renders the server error page.
pub async fn delete_venue(
    State(state): State<AppState>,
    flashes: Flashes,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::Internal(format!("cannot delete venue {:?}: bad id", id)))?;

    match venues::delete(&state.db, id).await {
        Ok(name) => {
            let outcome = Flash::success(format!("Venue {} was successfully deleted.", name));
            render_home(&state, &flashes.with(outcome)).await
        }
        Err(e) => Err(AppError::Internal(format!("delete of venue {} failed: {}", id, e))),
    }
}
