//! Artist pages

use fyyur_common::db::ArtistSummary;

use super::fields::{
    checkbox, error_summary, genres_select, state_select, text_input, textarea, FormMode,
};
use super::shows::{schedule_sections, Counterpart};
use super::{escape_html, genre_tags, image, layout, link_row};
use crate::flash::Flash;
use crate::forms::{ArtistForm, FieldErrors};
use crate::views::ArtistDetail;

pub fn artists_page(artists: &[ArtistSummary], flashes: &[Flash]) -> String {
    let items: String = artists
        .iter()
        .map(|a| format!(r#"<li><a href="/artists/{}">{}</a></li>"#, a.id, escape_html(&a.name)))
        .collect();
    let body = if artists.is_empty() {
        "<h2>Artists</h2><p>No artists listed yet.</p>".to_string()
    } else {
        format!("<h2>Artists</h2><ul>{}</ul>", items)
    };
    layout("Artists", flashes, &body)
}

pub fn artist_page(artist: &ArtistDetail, flashes: &[Flash]) -> String {
    let seeking = if artist.seeking_venue {
        format!(
            r#"<p class="seeking">Currently seeking performance venues</p><p>{}</p>"#,
            escape_html(artist.seeking_description.as_deref().unwrap_or(""))
        )
    } else {
        "<p>Not currently seeking performance venues</p>".to_string()
    };

    let body = format!(
        r#"<div class="detail">
<h1>{name}</h1>
<p><small>ID: {id}</small></p>
{genres}
<p>{city}, {state}</p>
<p>{phone}</p>
{website}
{facebook}
{seeking}
{img}
<p><a href="/artists/{id}/edit">Edit</a></p>
</div>
{schedule}"#,
        name = escape_html(&artist.name),
        id = artist.id,
        genres = genre_tags(&artist.genres),
        city = escape_html(&artist.city),
        state = escape_html(&artist.state),
        phone = escape_html(artist.phone.as_deref().unwrap_or("No phone listed")),
        website = link_row("Website", artist.website_link.as_deref()),
        facebook = link_row("Facebook", artist.facebook_link.as_deref()),
        seeking = seeking,
        img = image(artist.image_link.as_deref(), &artist.name),
        schedule = schedule_sections(&artist.schedule, Counterpart::Venue),
    );
    layout(&artist.name, flashes, &body)
}

pub fn artist_form_page(form: &ArtistForm, errors: &FieldErrors, mode: FormMode) -> String {
    let (title, heading, submit) = match mode {
        FormMode::Create => ("New Artist".to_string(), "List a new artist".to_string(), "Create Artist"),
        FormMode::Edit(_) => (
            format!("Edit {}", form.name),
            format!("Edit artist {}", escape_html(&form.name)),
            "Save Changes",
        ),
    };

    let body = format!(
        r#"<h2>{heading}</h2>
{summary}
<form method="post" action="{action}">
{name}{city}{state}{phone}{image}{genres}{facebook}{website}{seeking}{description}
<p><input type="submit" value="{submit}"></p>
</form>"#,
        heading = heading,
        summary = error_summary(errors),
        action = mode.action("/artists"),
        name = text_input("name", "Name", &form.name, errors),
        city = text_input("city", "City", &form.city, errors),
        state = state_select(&form.state, errors),
        phone = text_input("phone", "Phone", &form.phone, errors),
        image = text_input("image_link", "Image link", &form.image_link, errors),
        genres = genres_select(&form.genres, errors),
        facebook = text_input("facebook_link", "Facebook link", &form.facebook_link, errors),
        website = text_input("website_link", "Website link", &form.website_link, errors),
        seeking = checkbox("seeking_venue", "Seeking venue", form.seeking_venue),
        description = textarea("seeking_description", "Seeking description", &form.seeking_description),
        submit = submit,
    );
    layout(&title, &[], &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_links_each_artist() {
        let artists = vec![
            ArtistSummary { id: 4, name: "Guns N Petals".to_string() },
            ArtistSummary { id: 6, name: "The Wild Sax Band".to_string() },
        ];
        let html = artists_page(&artists, &[]);

        assert!(html.contains(r#"<a href="/artists/4">Guns N Petals</a>"#));
        assert!(html.contains(r#"<a href="/artists/6">The Wild Sax Band</a>"#));
    }

    #[test]
    fn test_create_form_shows_errors() {
        let mut errors = FieldErrors::default();
        errors.add("name", "This field is required.");
        let html = artist_form_page(&ArtistForm::default(), &errors, FormMode::Create);

        assert!(html.contains(r#"action="/artists/create""#));
        assert!(html.contains("Please fix the following errors: name: This field is required."));
        assert!(html.contains(r#"name="seeking_venue""#));
    }
}
