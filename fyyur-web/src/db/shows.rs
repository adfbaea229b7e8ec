//! Show queries
//!
//! Shows are always read joined with the name and image of their venue and
//! artist, ordered by start time.

use fyyur_common::db::{ShowData, ShowListing};
use fyyur_common::{Error, Result};
use sqlx::SqlitePool;
use std::collections::HashMap;
use tracing::info;

use super::{id_list, rollback};

const LISTING_SELECT: &str = r#"
    SELECT s.id, s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
           s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
           s.start_time
    FROM shows s
    JOIN venues v ON v.id = s.venue_id
    JOIN artists a ON a.id = s.artist_id
"#;

/// Why a show could not be created
#[derive(Debug)]
pub enum ShowInsertError {
    /// Referenced venue does not exist
    UnknownVenue(i64),
    /// Referenced artist does not exist
    UnknownArtist(i64),
    /// Anything the database reported
    Persistence(Error),
}

impl From<sqlx::Error> for ShowInsertError {
    fn from(e: sqlx::Error) -> Self {
        ShowInsertError::Persistence(e.into())
    }
}

/// Every show
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<ShowListing>> {
    let sql = format!("{} ORDER BY s.start_time, s.id", LISTING_SELECT);
    let shows = sqlx::query_as::<_, ShowListing>(&sql).fetch_all(pool).await?;
    Ok(shows)
}

/// Shows hosted by venue `venue_id`
pub async fn for_venue(pool: &SqlitePool, venue_id: i64) -> Result<Vec<ShowListing>> {
    let sql = format!("{} WHERE s.venue_id = ? ORDER BY s.start_time, s.id", LISTING_SELECT);
    let shows = sqlx::query_as::<_, ShowListing>(&sql)
        .bind(venue_id)
        .fetch_all(pool)
        .await?;
    Ok(shows)
}

/// Shows played by artist `artist_id`
pub async fn for_artist(pool: &SqlitePool, artist_id: i64) -> Result<Vec<ShowListing>> {
    let sql = format!("{} WHERE s.artist_id = ? ORDER BY s.start_time, s.id", LISTING_SELECT);
    let shows = sqlx::query_as::<_, ShowListing>(&sql)
        .bind(artist_id)
        .fetch_all(pool)
        .await?;
    Ok(shows)
}

/// Shows for each of `venue_ids`, keyed by venue id
///
/// Venues without shows have no entry.
pub async fn for_venues(pool: &SqlitePool, venue_ids: &[i64]) -> Result<HashMap<i64, Vec<ShowListing>>> {
    if venue_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let sql = format!(
        "{} WHERE s.venue_id IN (SELECT value FROM json_each(?)) ORDER BY s.start_time, s.id",
        LISTING_SELECT
    );
    let shows = sqlx::query_as::<_, ShowListing>(&sql)
        .bind(id_list(venue_ids))
        .fetch_all(pool)
        .await?;

    let mut by_venue: HashMap<i64, Vec<ShowListing>> = HashMap::new();
    for show in shows {
        by_venue.entry(show.venue_id).or_default().push(show);
    }
    Ok(by_venue)
}

/// Shows for each of `artist_ids`, keyed by artist id
pub async fn for_artists(pool: &SqlitePool, artist_ids: &[i64]) -> Result<HashMap<i64, Vec<ShowListing>>> {
    if artist_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let sql = format!(
        "{} WHERE s.artist_id IN (SELECT value FROM json_each(?)) ORDER BY s.start_time, s.id",
        LISTING_SELECT
    );
    let shows = sqlx::query_as::<_, ShowListing>(&sql)
        .bind(id_list(artist_ids))
        .fetch_all(pool)
        .await?;

    let mut by_artist: HashMap<i64, Vec<ShowListing>> = HashMap::new();
    for show in shows {
        by_artist.entry(show.artist_id).or_default().push(show);
    }
    Ok(by_artist)
}

/// Insert a new show, returning its id
///
/// The venue and artist are checked inside the same transaction as the
/// insert.
pub async fn insert(pool: &SqlitePool, data: &ShowData) -> std::result::Result<i64, ShowInsertError> {
    let mut tx = pool.begin().await?;

    let venue_exists: Option<i64> = sqlx::query_scalar("SELECT id FROM venues WHERE id = ?")
        .bind(data.venue_id)
        .fetch_optional(&mut *tx)
        .await?;
    if venue_exists.is_none() {
        tx.rollback().await?;
        return Err(ShowInsertError::UnknownVenue(data.venue_id));
    }

    let artist_exists: Option<i64> = sqlx::query_scalar("SELECT id FROM artists WHERE id = ?")
        .bind(data.artist_id)
        .fetch_optional(&mut *tx)
        .await?;
    if artist_exists.is_none() {
        tx.rollback().await?;
        return Err(ShowInsertError::UnknownArtist(data.artist_id));
    }

    let result = sqlx::query("INSERT INTO shows (venue_id, artist_id, start_time) VALUES (?, ?, ?)")
        .bind(data.venue_id)
        .bind(data.artist_id)
        .bind(data.start_time)
        .execute(&mut *tx)
        .await;

    match result {
        Ok(done) => {
            tx.commit().await?;
            let id = done.last_insert_rowid();
            info!(
                "Listed show {} (venue {}, artist {}, {})",
                id, data.venue_id, data.artist_id, data.start_time
            );
            Ok(id)
        }
        Err(e) => rollback(tx, e.into())
            .await
            .map_err(ShowInsertError::Persistence),
    }
}
