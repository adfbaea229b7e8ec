//! Venue pages

use super::fields::{
    checkbox, error_summary, genres_select, state_select, text_input, textarea, FormMode,
};
use super::shows::{schedule_sections, Counterpart};
use super::{escape_html, genre_tags, image, layout, link_row};
use crate::flash::Flash;
use crate::forms::{FieldErrors, VenueForm};
use crate::views::{Area, VenueDetail};

/// Venues grouped by city
pub fn venues_page(areas: &[Area], flashes: &[Flash]) -> String {
    let mut body = String::from("<h2>Venues</h2>");
    if areas.is_empty() {
        body.push_str("<p>No venues listed yet.</p>");
    }
    for area in areas {
        let items: String = area
            .venues
            .iter()
            .map(|v| {
                format!(
                    r#"<li><a href="/venues/{}">{}</a> <small>{} upcoming</small></li>"#,
                    v.id,
                    escape_html(&v.name),
                    v.schedule.upcoming_shows_count
                )
            })
            .collect();
        body.push_str(&format!(
            "<h3>{}, {}</h3><ul>{}</ul>",
            escape_html(&area.city),
            escape_html(&area.state),
            items
        ));
    }
    layout("Venues", flashes, &body)
}

pub fn venue_page(venue: &VenueDetail, flashes: &[Flash]) -> String {
    let seeking = if venue.seeking_talent {
        format!(
            r#"<p class="seeking">Currently seeking talent</p><p>{}</p>"#,
            escape_html(venue.seeking_description.as_deref().unwrap_or(""))
        )
    } else {
        "<p>Not currently seeking talent</p>".to_string()
    };

    let body = format!(
        r#"<div class="detail">
<h1>{name}</h1>
<p><small>ID: {id}</small></p>
{genres}
<p>{address}, {city}, {state}</p>
<p>{phone}</p>
{website}
{facebook}
{seeking}
{img}
<p><a href="/venues/{id}/edit">Edit</a> <button id="delete-venue" data-id="{id}">Delete</button></p>
</div>
{schedule}
<script>
document.getElementById('delete-venue').addEventListener('click', function (e) {{
    const id = e.target.dataset.id;
    fetch('/venues/' + id, {{ method: 'DELETE' }})
        .then(function (response) {{ return response.text(); }})
        .then(function (html) {{
            window.history.replaceState(null, '', '/');
            document.open();
            document.write(html);
            document.close();
        }});
}});
</script>"#,
        name = escape_html(&venue.name),
        id = venue.id,
        genres = genre_tags(&venue.genres),
        address = escape_html(&venue.address),
        city = escape_html(&venue.city),
        state = escape_html(&venue.state),
        phone = escape_html(venue.phone.as_deref().unwrap_or("No phone listed")),
        website = link_row("Website", venue.website_link.as_deref()),
        facebook = link_row("Facebook", venue.facebook_link.as_deref()),
        seeking = seeking,
        img = image(venue.image_link.as_deref(), &venue.name),
        schedule = schedule_sections(&venue.schedule, Counterpart::Artist),
    );
    layout(&venue.name, flashes, &body)
}

pub fn venue_form_page(form: &VenueForm, errors: &FieldErrors, mode: FormMode) -> String {
    let (title, heading, submit) = match mode {
        FormMode::Create => ("New Venue".to_string(), "List a new venue".to_string(), "Create Venue"),
        FormMode::Edit(_) => (
            format!("Edit {}", form.name),
            format!("Edit venue {}", escape_html(&form.name)),
            "Save Changes",
        ),
    };

    let body = format!(
        r#"<h2>{heading}</h2>
{summary}
<form method="post" action="{action}">
{name}{city}{state}{address}{phone}{image}{genres}{facebook}{website}{seeking}{description}
<p><input type="submit" value="{submit}"></p>
</form>"#,
        heading = heading,
        summary = error_summary(errors),
        action = mode.action("/venues"),
        name = text_input("name", "Name", &form.name, errors),
        city = text_input("city", "City", &form.city, errors),
        state = state_select(&form.state, errors),
        address = text_input("address", "Address", &form.address, errors),
        phone = text_input("phone", "Phone", &form.phone, errors),
        image = text_input("image_link", "Image link", &form.image_link, errors),
        genres = genres_select(&form.genres, errors),
        facebook = text_input("facebook_link", "Facebook link", &form.facebook_link, errors),
        website = text_input("website_link", "Website link", &form.website_link, errors),
        seeking = checkbox("seeking_talent", "Seeking talent", form.seeking_talent),
        description = textarea("seeking_description", "Seeking description", &form.seeking_description),
        submit = submit,
    );
    layout(&title, &[], &body)
}
