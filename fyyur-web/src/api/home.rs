//! Home page

use axum::{extract::State, response::Html};

use super::RECENT_LIMIT;
use crate::db::{artists, venues};
use crate::error::AppResult;
use crate::flash::{Flash, Flashes};
use crate::render::home::home_page;
use crate::AppState;

/// Home page showing `flashes`
///
/// Also the landing page for creates and deletes, which pass their own
/// outcome message along with any incoming ones.
pub(crate) async fn render_home(state: &AppState, flashes: &[Flash]) -> AppResult<Html<String>> {
    let recent_venues = venues::recent(&state.db, RECENT_LIMIT).await?;
    let recent_artists = artists::recent(&state.db, RECENT_LIMIT).await?;
    Ok(Html(home_page(&recent_venues, &recent_artists, flashes)))
}

/// GET /
pub async fn index(State(state): State<AppState>, flashes: Flashes) -> AppResult<Html<String>> {
    render_home(&state, &flashes.0).await
}
