//! Show cards, the show listing and the show form

use fyyur_common::datetime::{format_datetime, DateFormat};
use fyyur_common::db::ShowListing;

use super::fields::{error_summary, text_input};
use super::{escape_html, image, layout};
use crate::flash::Flash;
use crate::forms::{FieldErrors, ShowForm};
use crate::views::{ShowCard, ShowSchedule};

/// Which side of the show a detail page links to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counterpart {
    Venue,
    Artist,
}

fn card(show: &ShowCard, counterpart: Counterpart) -> String {
    let (href, name, img) = match counterpart {
        Counterpart::Venue => (
            format!("/venues/{}", show.venue_id),
            &show.venue_name,
            show.venue_image_link.as_deref(),
        ),
        Counterpart::Artist => (
            format!("/artists/{}", show.artist_id),
            &show.artist_name,
            show.artist_image_link.as_deref(),
        ),
    };
    format!(
        r#"<div class="show">{img}<h5><a href="{href}">{name}</a></h5><h6>{when}</h6></div>"#,
        img = image(img, name),
        href = href,
        name = escape_html(name),
        when = format_datetime(&show.start_time, DateFormat::Medium),
    )
}

/// Past and upcoming sections of a venue or artist page
pub fn schedule_sections(schedule: &ShowSchedule, counterpart: Counterpart) -> String {
    let upcoming: String = schedule
        .upcoming_shows
        .iter()
        .map(|s| card(s, counterpart))
        .collect();
    let past: String = schedule
        .past_shows
        .iter()
        .map(|s| card(s, counterpart))
        .collect();
    format!(
        r#"<section><h3>{up_count} Upcoming {up_label}</h3>{upcoming}</section>
<section><h3>{past_count} Past {past_label}</h3>{past}</section>"#,
        up_count = schedule.upcoming_shows_count,
        up_label = if schedule.upcoming_shows_count == 1 { "Show" } else { "Shows" },
        upcoming = upcoming,
        past_count = schedule.past_shows_count,
        past_label = if schedule.past_shows_count == 1 { "Show" } else { "Shows" },
        past = past,
    )
}

/// Every show, with both venue and artist
pub fn shows_page(shows: &[ShowListing], flashes: &[Flash]) -> String {
    let rows: String = shows
        .iter()
        .map(|s| {
            format!(
                r#"<div class="show">{img}<h5><a href="/artists/{artist_id}">{artist}</a></h5><p>playing at <a href="/venues/{venue_id}">{venue}</a></p><h6>{when}</h6></div>"#,
                img = image(s.artist_image_link.as_deref(), &s.artist_name),
                artist_id = s.artist_id,
                artist = escape_html(&s.artist_name),
                venue_id = s.venue_id,
                venue = escape_html(&s.venue_name),
                when = format_datetime(&s.start_time, DateFormat::Full),
            )
        })
        .collect();
    let body = if shows.is_empty() {
        "<h2>Shows</h2><p>No shows listed yet.</p>".to_string()
    } else {
        format!("<h2>Shows</h2>{}", rows)
    };
    layout("Shows", flashes, &body)
}

pub fn show_form_page(form: &ShowForm, errors: &FieldErrors) -> String {
    let body = format!(
        r#"<h2>List a new show</h2>
{summary}
<form method="post" action="/shows/create">
{artist}
{venue}
{start}
<p><input type="submit" value="Create Show"></p>
</form>"#,
        summary = error_summary(errors),
        artist = text_input("artist_id", "Artist ID", &form.artist_id, errors),
        venue = text_input("venue_id", "Venue ID", &form.venue_id, errors),
        start = text_input("start_time", "Start time (YYYY-MM-DD HH:MM)", &form.start_time, errors),
    );
    layout("New Show", &[], &body)
}
