//! Artist detail

use chrono::NaiveDateTime;
use fyyur_common::db::{Artist, ShowListing};
use serde::Serialize;

use super::shows::{partition_shows, ShowSchedule};

/// Artist with their shows split into past and upcoming
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistDetail {
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
    #[serde(flatten)]
    pub schedule: ShowSchedule,
}

impl ArtistDetail {
    pub fn new(artist: &Artist, shows: &[ShowListing], now: NaiveDateTime) -> Self {
        Self {
            id: artist.id,
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            image_link: artist.image_link.clone(),
            facebook_link: artist.facebook_link.clone(),
            website_link: artist.website_link.clone(),
            genres: artist.genres.clone(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone(),
            schedule: partition_shows(shows, now),
        }
    }
}
