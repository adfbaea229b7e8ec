//! Artist queries

use fyyur_common::db::{Artist, ArtistData, ArtistSummary};
use fyyur_common::{Error, Result};
use sqlx::types::Json;
use sqlx::SqlitePool;
use tracing::info;

use super::{name_matches, rollback};

/// Id and name of every artist, in insertion order
pub async fn list_summaries(pool: &SqlitePool) -> Result<Vec<ArtistSummary>> {
    let artists = sqlx::query_as::<_, ArtistSummary>("SELECT id, name FROM artists ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(artists)
}

/// Most recently listed artists, newest first
pub async fn recent(pool: &SqlitePool, limit: i64) -> Result<Vec<Artist>> {
    let artists = sqlx::query_as::<_, Artist>("SELECT * FROM artists ORDER BY id DESC LIMIT ?")
        .bind(limit)
        .fetch_all(pool)
        .await?;
    Ok(artists)
}

/// Load artist by id
pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Artist>> {
    let artist = sqlx::query_as::<_, Artist>("SELECT * FROM artists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(artist)
}

/// Artists whose name contains `term`, ignoring case
///
/// Matching is done on Unicode-lowercased names rather than with SQL
/// `LIKE`, so `%` and `_` in the term are literal and non-ASCII names fold
/// correctly.
pub async fn search_by_name(pool: &SqlitePool, term: &str) -> Result<Vec<Artist>> {
    let all = sqlx::query_as::<_, Artist>("SELECT * FROM artists ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(all.into_iter().filter(|r| name_matches(&r.name, term)).collect())
}

/// Insert a new artist, returning its id
pub async fn insert(pool: &SqlitePool, data: &ArtistData) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        INSERT INTO artists (
            name, city, state, phone, image_link, facebook_link, website_link,
            genres, seeking_venue, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&data.name)
    .bind(&data.city)
    .bind(&data.state)
    .bind(&data.phone)
    .bind(&data.image_link)
    .bind(&data.facebook_link)
    .bind(&data.website_link)
    .bind(Json(&data.genres))
    .bind(data.seeking_venue)
    .bind(&data.seeking_description)
    .execute(&mut *tx)
    .await;

    match result {
        Ok(done) => {
            tx.commit().await?;
            let id = done.last_insert_rowid();
            info!("Listed artist {} ({})", id, data.name);
            Ok(id)
        }
        Err(e) => rollback(tx, e.into()).await,
    }
}

/// Overwrite every editable attribute of artist `id`
pub async fn update(pool: &SqlitePool, id: i64, data: &ArtistData) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE artists SET
            name = ?, city = ?, state = ?, phone = ?, image_link = ?, facebook_link = ?,
            website_link = ?, genres = ?, seeking_venue = ?, seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&data.name)
    .bind(&data.city)
    .bind(&data.state)
    .bind(&data.phone)
    .bind(&data.image_link)
    .bind(&data.facebook_link)
    .bind(&data.website_link)
    .bind(Json(&data.genres))
    .bind(data.seeking_venue)
    .bind(&data.seeking_description)
    .bind(id)
    .execute(&mut *tx)
    .await;

    match result {
        Ok(done) if done.rows_affected() == 0 => {
            rollback(tx, Error::NotFound(format!("artist {}", id))).await
        }
        Ok(_) => {
            tx.commit().await?;
            info!("Updated artist {}", id);
            Ok(())
        }
        Err(e) => rollback(tx, e.into()).await,
    }
}
