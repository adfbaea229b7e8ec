//! Venue queries

use fyyur_common::db::{Venue, VenueData};
use fyyur_common::{Error, Result};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::{FromRow, SqlitePool};
use tracing::info;

use super::{name_matches, rollback};

/// Distinct (city, state) pair present among venues
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, FromRow)]
pub struct AreaKey {
    pub city: String,
    pub state: String,
}

/// All venues in insertion order
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Venue>> {
    let venues = sqlx::query_as::<_, Venue>("SELECT * FROM venues ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(venues)
}

/// Most recently listed venues, newest first
pub async fn recent(pool: &SqlitePool, limit: i64) -> Result<Vec<Venue>> {
    let venues = sqlx::query_as::<_, Venue>("SELECT * FROM venues ORDER BY id DESC LIMIT ?")
        .bind(limit)
        .fetch_all(pool)
        .await?;
    Ok(venues)
}

/// Load venue by id
pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Venue>> {
    let venue = sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(venue)
}

/// Distinct (city, state) pairs, in order of their first listed venue
pub async fn distinct_areas(pool: &SqlitePool) -> Result<Vec<AreaKey>> {
    let areas = sqlx::query_as::<_, AreaKey>(
        r#"
        SELECT city, state
        FROM venues
        GROUP BY city, state
        ORDER BY MIN(id)
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(areas)
}

/// Venues whose name contains `term`, ignoring case
///
/// Matching is done on Unicode-lowercased names rather than with SQL
/// `LIKE`, so `%` and `_` in the term are literal and non-ASCII names fold
/// correctly.
pub async fn search_by_name(pool: &SqlitePool, term: &str) -> Result<Vec<Venue>> {
    let all = sqlx::query_as::<_, Venue>("SELECT * FROM venues ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(all.into_iter().filter(|r| name_matches(&r.name, term)).collect())
}

/// Insert a new venue, returning its id
pub async fn insert(pool: &SqlitePool, data: &VenueData) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        INSERT INTO venues (
            name, city, state, address, phone, image_link, facebook_link,
            website_link, genres, seeking_talent, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&data.name)
    .bind(&data.city)
    .bind(&data.state)
    .bind(&data.address)
    .bind(&data.phone)
    .bind(&data.image_link)
    .bind(&data.facebook_link)
    .bind(&data.website_link)
    .bind(Json(&data.genres))
    .bind(data.seeking_talent)
    .bind(&data.seeking_description)
    .execute(&mut *tx)
    .await;

    match result {
        Ok(done) => {
            tx.commit().await?;
            let id = done.last_insert_rowid();
            info!("Listed venue {} ({})", id, data.name);
            Ok(id)
        }
        Err(e) => rollback(tx, e.into()).await,
    }
}

/// Overwrite every editable attribute of venue `id`
pub async fn update(pool: &SqlitePool, id: i64, data: &VenueData) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE venues SET
            name = ?, city = ?, state = ?, address = ?, phone = ?, image_link = ?,
            facebook_link = ?, website_link = ?, genres = ?, seeking_talent = ?,
            seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&data.name)
    .bind(&data.city)
    .bind(&data.state)
    .bind(&data.address)
    .bind(&data.phone)
    .bind(&data.image_link)
    .bind(&data.facebook_link)
    .bind(&data.website_link)
    .bind(Json(&data.genres))
    .bind(data.seeking_talent)
    .bind(&data.seeking_description)
    .bind(id)
    .execute(&mut *tx)
    .await;

    match result {
        Ok(done) if done.rows_affected() == 0 => {
            rollback(tx, Error::NotFound(format!("venue {}", id))).await
        }
        Ok(_) => {
            tx.commit().await?;
            info!("Updated venue {}", id);
            Ok(())
        }
        Err(e) => rollback(tx, e.into()).await,
    }
}

/// Delete venue `id` and, by cascade, its shows; returns the venue's name
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<String> {
    let mut tx = pool.begin().await?;

    let name: Option<String> = match sqlx::query_scalar("SELECT name FROM venues WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
    {
        Ok(name) => name,
        Err(e) => return rollback(tx, e.into()).await,
    };

    let Some(name) = name else {
        return rollback(tx, Error::NotFound(format!("venue {}", id))).await;
    };

    if let Err(e) = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await
    {
        return rollback(tx, e.into()).await;
    }

    tx.commit().await?;
    info!("Deleted venue {} ({})", id, name);
    Ok(name)
}
