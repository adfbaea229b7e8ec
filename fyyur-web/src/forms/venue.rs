//! Venue listing form

use fyyur_common::db::{Venue, VenueData};

use super::{
    check_genres, check_phone, check_required, check_state, check_url, optional, FieldErrors,
    FormData,
};

/// Venue form as submitted or as populated from a stored venue
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl VenueForm {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            name: form.value("name"),
            city: form.value("city"),
            state: form.value("state"),
            address: form.value("address"),
            phone: form.value("phone"),
            image_link: form.value("image_link"),
            genres: form.values("genres"),
            facebook_link: form.value("facebook_link"),
            website_link: form.value("website_link"),
            seeking_talent: form.checked("seeking_talent"),
            seeking_description: form.value("seeking_description"),
        }
    }

    /// Edit form pre-populated from `venue`
    pub fn from_venue(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone().unwrap_or_default(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            genres: venue.genres.clone(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            website_link: venue.website_link.clone().unwrap_or_default(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<VenueData, FieldErrors> {
        let mut errors = FieldErrors::default();
        check_required(&mut errors, "name", &self.name);
        check_required(&mut errors, "city", &self.city);
        check_state(&mut errors, "state", &self.state);
        check_required(&mut errors, "address", &self.address);
        check_phone(&mut errors, "phone", &self.phone);
        check_url(&mut errors, "image_link", &self.image_link);
        check_genres(&mut errors, "genres", &self.genres);
        check_url(&mut errors, "facebook_link", &self.facebook_link);
        check_url(&mut errors, "website_link", &self.website_link);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(VenueData {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            address: self.address.clone(),
            phone: optional(&self.phone),
            image_link: optional(&self.image_link),
            facebook_link: optional(&self.facebook_link),
            website_link: optional(&self.website_link),
            genres: self.genres.clone(),
            seeking_talent: self.seeking_talent,
            seeking_description: optional(&self.seeking_description),
        })
    }
}
