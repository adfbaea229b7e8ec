//! Demo listings for a fresh database

use chrono::NaiveDateTime;
use fyyur_common::datetime::parse_datetime;
use fyyur_common::db::{ArtistData, ShowData, VenueData};
use fyyur_common::{Error, Result};
use sqlx::SqlitePool;
use tracing::info;

use super::shows::ShowInsertError;
use super::{artists, shows, venues};

fn some(s: &str) -> Option<String> {
    Some(s.to_string())
}

fn genres(list: &[&str]) -> Vec<String> {
    list.iter().map(|g| g.to_string()).collect()
}

fn demo_venues() -> Vec<VenueData> {
    vec![
        VenueData {
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: some("123-123-1234"),
            image_link: some("https://images.unsplash.com/photo-1543900694-133f37abaaa5?w=400"),
            facebook_link: some("https://www.facebook.com/TheMusicalHop"),
            website_link: some("https://www.themusicalhop.com"),
            genres: genres(&["Jazz", "Reggae", "Classical", "Folk"]),
            seeking_talent: true,
            seeking_description: some(
                "We are on the lookout for a local artist to play every two weeks. Please call us.",
            ),
        },
        VenueData {
            name: "The Dueling Pianos Bar".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            address: "335 Delancey Street".to_string(),
            phone: some("914-003-1132"),
            image_link: some("https://images.unsplash.com/photo-1497032205916-ac775f0649ae?w=400"),
            facebook_link: some("https://www.facebook.com/theduelingpianos"),
            website_link: some("https://www.theduelingpianos.com"),
            genres: genres(&["Classical", "R&B", "Hip-Hop"]),
            seeking_talent: false,
            seeking_description: None,
        },
        VenueData {
            name: "Park Square Live Music & Coffee".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "34 Whiskey Moore Ave".to_string(),
            phone: some("415-000-1234"),
            image_link: some("https://images.unsplash.com/photo-1485686531765-ba63b07845a7?w=400"),
            facebook_link: some("https://www.facebook.com/ParkSquareLiveMusicAndCoffee"),
            website_link: some("https://www.parksquarelivemusicandcoffee.com"),
            genres: genres(&["Rock n Roll", "Jazz", "Classical", "Folk"]),
            seeking_talent: false,
            seeking_description: None,
        },
    ]
}

fn demo_artists() -> Vec<ArtistData> {
    vec![
        ArtistData {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: some("326-123-5000"),
            image_link: some("https://images.unsplash.com/photo-1549213783-8284d0336c4f?w=300"),
            facebook_link: some("https://www.facebook.com/GunsNPetals"),
            website_link: some("https://www.gunsnpetalsband.com"),
            genres: genres(&["Rock n Roll"]),
            seeking_venue: true,
            seeking_description: some(
                "Looking for shows to perform at in the San Francisco Bay Area!",
            ),
        },
        ArtistData {
            name: "Matt Quevado".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            phone: some("300-400-5000"),
            image_link: some("https://images.unsplash.com/photo-1495223153807-b916f75de8c5?w=334"),
            facebook_link: some("https://www.facebook.com/mattquevedo923251523"),
            website_link: None,
            genres: genres(&["Jazz"]),
            seeking_venue: false,
            seeking_description: None,
        },
        ArtistData {
            name: "The Wild Sax Band".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: some("432-325-5432"),
            image_link: some("https://images.unsplash.com/photo-1558369981-f9ca78462e61?w=794"),
            facebook_link: None,
            website_link: None,
            genres: genres(&["Jazz", "Classical"]),
            seeking_venue: false,
            seeking_description: None,
        },
    ]
}

/// (venue index, artist index, start time) of each demo show
const DEMO_SHOWS: &[(usize, usize, &str)] = &[
    (0, 0, "2019-05-21 21:30:00"),
    (2, 1, "2019-06-15 23:00:00"),
    (2, 2, "2035-04-01 20:00:00"),
    (2, 2, "2035-04-08 20:00:00"),
    (2, 2, "2035-04-15 20:00:00"),
];

fn start_time(text: &str) -> Result<NaiveDateTime> {
    parse_datetime(text).ok_or_else(|| Error::InvalidInput(format!("bad demo start time {}", text)))
}

/// Insert the demo venues, artists and shows
///
/// Does nothing and returns `false` when any venue is already listed.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<bool> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM venues")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        info!("Database already has {} venues, skipping demo data", existing);
        return Ok(false);
    }

    let mut venue_ids = Vec::new();
    for venue in demo_venues() {
        venue_ids.push(venues::insert(pool, &venue).await?);
    }

    let mut artist_ids = Vec::new();
    for artist in demo_artists() {
        artist_ids.push(artists::insert(pool, &artist).await?);
    }

    for &(venue, artist, time) in DEMO_SHOWS {
        let show = ShowData {
            venue_id: venue_ids[venue],
            artist_id: artist_ids[artist],
            start_time: start_time(time)?,
        };
        shows::insert(pool, &show).await.map_err(|e| match e {
            ShowInsertError::Persistence(err) => err,
            other => Error::Internal(format!("demo show rejected: {:?}", other)),
        })?;
    }

    info!(
        "Seeded {} venues, {} artists, {} shows",
        venue_ids.len(),
        artist_ids.len(),
        DEMO_SHOWS.len()
    );
    Ok(true)
}
