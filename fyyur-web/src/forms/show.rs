//! Show listing form

use chrono::NaiveDateTime;
use fyyur_common::datetime::parse_datetime;
use fyyur_common::db::ShowData;

use super::{check_required, FieldErrors, FormData};

/// Layout used to pre-fill the start time
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Show form as submitted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowForm {
    /// Blank form with the start time pre-filled to `now`
    pub fn empty(now: NaiveDateTime) -> Self {
        Self {
            start_time: now.format(START_TIME_FORMAT).to_string(),
            ..Default::default()
        }
    }

    pub fn from_form(form: &FormData) -> Self {
        Self {
            artist_id: form.value("artist_id"),
            venue_id: form.value("venue_id"),
            start_time: form.value("start_time"),
        }
    }

    pub fn validate(&self) -> Result<ShowData, FieldErrors> {
        let mut errors = FieldErrors::default();

        let artist_id = parse_id(&mut errors, "artist_id", &self.artist_id);
        let venue_id = parse_id(&mut errors, "venue_id", &self.venue_id);

        check_required(&mut errors, "start_time", &self.start_time);
        let start_time = if self.start_time.is_empty() {
            None
        } else {
            let parsed = parse_datetime(&self.start_time);
            if parsed.is_none() {
                errors.add("start_time", "Not a valid datetime value.");
            }
            parsed
        };

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) if errors.is_empty() => Ok(ShowData {
                venue_id,
                artist_id,
                start_time,
            }),
            _ => Err(errors),
        }
    }
}

fn parse_id(errors: &mut FieldErrors, field: &'static str, value: &str) -> Option<i64> {
    if value.is_empty() {
        errors.add(field, "This field is required.");
        return None;
    }
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.add(field, "Not a valid integer value.");
            None
        }
    }
}
