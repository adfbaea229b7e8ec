//! Persisted record types
//!
//! `Venue`, `Artist` and the show rows are plain data read back from the
//! database. The `*Data` types carry the editable attributes of a record and
//! are what inserts and full-row updates write.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::types::Json;
use sqlx::{FromRow, Row};

/// Venue row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Editable venue attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueData {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl Venue {
    /// Editable attributes of this record
    pub fn data(&self) -> VenueData {
        VenueData {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            image_link: self.image_link.clone(),
            facebook_link: self.facebook_link.clone(),
            website_link: self.website_link.clone(),
            genres: self.genres.clone(),
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description.clone(),
        }
    }
}

impl<'r> FromRow<'r, SqliteRow> for Venue {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        let genres: Json<Vec<String>> = row.try_get("genres")?;
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            address: row.try_get("address")?,
            phone: row.try_get("phone")?,
            image_link: row.try_get("image_link")?,
            facebook_link: row.try_get("facebook_link")?,
            website_link: row.try_get("website_link")?,
            genres: genres.0,
            seeking_talent: row.try_get("seeking_talent")?,
            seeking_description: row.try_get("seeking_description")?,
        })
    }
}

/// Artist row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Editable artist attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistData {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl Artist {
    /// Editable attributes of this record
    pub fn data(&self) -> ArtistData {
        ArtistData {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            phone: self.phone.clone(),
            image_link: self.image_link.clone(),
            facebook_link: self.facebook_link.clone(),
            website_link: self.website_link.clone(),
            genres: self.genres.clone(),
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description.clone(),
        }
    }
}

impl<'r> FromRow<'r, SqliteRow> for Artist {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        let genres: Json<Vec<String>> = row.try_get("genres")?;
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            phone: row.try_get("phone")?,
            image_link: row.try_get("image_link")?,
            facebook_link: row.try_get("facebook_link")?,
            website_link: row.try_get("website_link")?,
            genres: genres.0,
            seeking_venue: row.try_get("seeking_venue")?,
            seeking_description: row.try_get("seeking_description")?,
        })
    }
}

/// Artist id and name, for the artist listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ArtistSummary {
    pub id: i64,
    pub name: String,
}

/// New show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowData {
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: NaiveDateTime,
}

/// Show row joined with the names and images of its venue and artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ShowListing {
    pub id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}
