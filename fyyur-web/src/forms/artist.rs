//! Artist listing form

use fyyur_common::db::{Artist, ArtistData};

use super::{
    check_genres, check_phone, check_required, check_state, check_url, optional, FieldErrors,
    FormData,
};

/// Artist form as submitted or as populated from a stored artist
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            name: form.value("name"),
            city: form.value("city"),
            state: form.value("state"),
            phone: form.value("phone"),
            image_link: form.value("image_link"),
            genres: form.values("genres"),
            facebook_link: form.value("facebook_link"),
            website_link: form.value("website_link"),
            seeking_venue: form.checked("seeking_venue"),
            seeking_description: form.value("seeking_description"),
        }
    }

    /// Edit form pre-populated from `artist`
    pub fn from_artist(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone().unwrap_or_default(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            genres: artist.genres.clone(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            website_link: artist.website_link.clone().unwrap_or_default(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<ArtistData, FieldErrors> {
        let mut errors = FieldErrors::default();
        check_required(&mut errors, "name", &self.name);
        check_required(&mut errors, "city", &self.city);
        check_state(&mut errors, "state", &self.state);
        check_phone(&mut errors, "phone", &self.phone);
        check_url(&mut errors, "image_link", &self.image_link);
        check_genres(&mut errors, "genres", &self.genres);
        check_url(&mut errors, "facebook_link", &self.facebook_link);
        check_url(&mut errors, "website_link", &self.website_link);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ArtistData {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            phone: optional(&self.phone),
            image_link: optional(&self.image_link),
            facebook_link: optional(&self.facebook_link),
            website_link: optional(&self.website_link),
            genres: self.genres.clone(),
            seeking_venue: self.seeking_venue,
            seeking_description: optional(&self.seeking_description),
        })
    }
}
