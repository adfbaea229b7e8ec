//! Home page

use fyyur_common::db::{Artist, Venue};

use super::{escape_html, layout};
use crate::flash::Flash;

fn recent_list(title: &str, base: &str, entries: &[(i64, &str)]) -> String {
    if entries.is_empty() {
        return format!("<h3>{}</h3><p>Nothing listed yet.</p>", title);
    }
    let items: String = entries
        .iter()
        .map(|(id, name)| format!(r#"<li><a href="{}/{}">{}</a></li>"#, base, id, escape_html(name)))
        .collect();
    format!("<h3>{}</h3><ul>{}</ul>", title, items)
}

/// Landing page with the most recently listed venues and artists
pub fn home_page(venues: &[Venue], artists: &[Artist], flashes: &[Flash]) -> String {
    let venue_entries: Vec<(i64, &str)> = venues.iter().map(|v| (v.id, v.name.as_str())).collect();
    let artist_entries: Vec<(i64, &str)> = artists.iter().map(|a| (a.id, a.name.as_str())).collect();

    let body = format!(
        r#"<h1>Fyyur</h1>
<p>Book local talent at local venues.</p>
<form method="post" action="/venues/search"><input type="search" name="search_term" placeholder="Find a venue"></form>
<form method="post" action="/artists/search"><input type="search" name="search_term" placeholder="Find an artist"></form>
{venues}
{artists}"#,
        venues = recent_list("Recently listed venues", "/venues", &venue_entries),
        artists = recent_list("Recently listed artists", "/artists", &artist_entries),
    );
    layout("Home", flashes, &body)
}
