//! Artist handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{error, info, warn};

use super::home::render_home;
use super::{now, parse_id, FormBody, SearchForm};
use crate::db::{artists, shows};
use crate::error::{AppError, AppResult};
use crate::flash::{redirect_with_flash, Flash, Flashes};
use crate::forms::{ArtistForm, FormData};
use crate::render::artists::{artist_form_page, artist_page, artists_page};
use crate::render::fields::FormMode;
use crate::render::search::{search_page, SearchKind};
use crate::views::{search_results, ArtistDetail};
use crate::AppState;

/// GET /artists
pub async fn list_artists(State(state): State<AppState>, flashes: Flashes) -> AppResult<Html<String>> {
    let summaries = artists::list_summaries(&state.db).await?;
    Ok(Html(artists_page(&summaries, &flashes.0)))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    FormBody(search): FormBody<SearchForm>,
) -> AppResult<Html<String>> {
    let matches = artists::search_by_name(&state.db, &search.search_term).await?;
    let ids: Vec<i64> = matches.iter().map(|a| a.id).collect();
    let shows_by_artist = shows::for_artists(&state.db, &ids).await?;

    let results = search_results(&matches, &shows_by_artist, now());
    info!("Artist search {:?} matched {}", search.search_term, results.count);
    Ok(Html(search_page(SearchKind::Artists, &search.search_term, &results)))
}

/// GET /artists/:id
pub async fn show_artist(
    State(state): State<AppState>,
    flashes: Flashes,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_id(&id)?;
    let artist = artists::find(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("artist {}", id)))?;
    let artist_shows = shows::for_artist(&state.db, id).await?;

    let detail = ArtistDetail::new(&artist, &artist_shows, now());
    Ok(Html(artist_page(&detail, &flashes.0)))
}

/// GET /artists/create
pub async fn new_artist_form() -> Html<String> {
    Html(artist_form_page(&ArtistForm::default(), &Default::default(), FormMode::Create))
}

/// POST /artists/create
pub async fn create_artist(
    State(state): State<AppState>,
    flashes: Flashes,
    FormBody(pairs): FormBody<Vec<(String, String)>>,
) -> AppResult<Response> {
    let form = ArtistForm::from_form(&FormData::new(pairs));
    let data = match form.validate() {
        Ok(data) => data,
        Err(errors) => {
            warn!("Rejected artist form: {}", errors.summary());
            let page = artist_form_page(&form, &errors, FormMode::Create);
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response());
        }
    };

    let outcome = match artists::insert(&state.db, &data).await {
        Ok(_) => Flash::success(format!("Artist {} was successfully listed!", data.name)),
        Err(e) => {
            error!("Failed to list artist {}: {}", data.name, e);
            Flash::error(format!("An error occurred. Artist {} could not be listed.", data.name))
        }
    };

    Ok(render_home(&state, &flashes.with(outcome)).await?.into_response())
}

/// GET /artists/:id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_id(&id)?;
    let artist = artists::find(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("artist {}", id)))?;

    let form = ArtistForm::from_artist(&artist);
    Ok(Html(artist_form_page(&form, &Default::default(), FormMode::Edit(id))))
}

/// POST /artists/:id/edit
pub async fn update_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    FormBody(pairs): FormBody<Vec<(String, String)>>,
) -> AppResult<Response> {
    let id = parse_id(&id)?;
    if artists::find(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound(format!("artist {}", id)));
    }

    let form = ArtistForm::from_form(&FormData::new(pairs));
    let data = match form.validate() {
        Ok(data) => data,
        Err(errors) => {
            warn!("Rejected edit of artist {}: {}", id, errors.summary());
            let page = artist_form_page(&form, &errors, FormMode::Edit(id));
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response());
        }
    };

    let outcome = match artists::update(&state.db, id, &data).await {
        Ok(()) => Flash::success(format!("Artist {} was successfully updated!", data.name)),
        Err(e) if e.is_not_found() => return Err(e.into()),
        Err(e) => {
            error!("Failed to update artist {}: {}", id, e);
            Flash::error(format!("An error occurred. Artist {} could not be updated.", data.name))
        }
    };

    let location = format!("/artists/{}", id);
    Ok(redirect_with_flash(&state.config.secret_key, &location, &[outcome]))
}
