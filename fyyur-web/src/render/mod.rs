//! Server-side HTML rendering
//!
//! Pages are assembled with `format!` into a shared layout. Every value
//! that came from a user or the database passes through [`escape_html`].

pub mod artists;
pub mod errors;
pub mod fields;
pub mod home;
pub mod search;
pub mod shows;
pub mod venues;

use crate::flash::Flash;

/// Escape text for element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn flash_block(flashes: &[Flash]) -> String {
    flashes
        .iter()
        .map(|f| {
            format!(
                r#"<div class="alert alert-{}" role="alert">{}</div>"#,
                f.level.css(),
                escape_html(&f.text)
            )
        })
        .collect()
}

/// Wrap `body` in the site chrome
pub fn layout(title: &str, flashes: &[Flash], body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Fyyur</title>
    <style>
        body {{ font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 0; color: #222; }}
        header {{ background: #1a1a2e; padding: 12px 20px; }}
        header a {{ color: #e0e0e0; margin-right: 16px; text-decoration: none; }}
        header .brand {{ font-weight: 700; color: #4a9eff; }}
        main {{ padding: 20px; max-width: 960px; margin: 0 auto; }}
        .alert {{ padding: 10px 14px; margin-bottom: 12px; border-radius: 4px; }}
        .alert-success {{ background: #d4edda; }}
        .alert-info {{ background: #d1ecf1; }}
        .alert-danger {{ background: #f8d7da; }}
        .errors {{ color: #a94442; }}
        .genres span {{ display: inline-block; background: #eee; padding: 2px 8px; margin: 2px; border-radius: 8px; }}
        .show {{ display: inline-block; width: 200px; margin: 8px; vertical-align: top; }}
        .show img, .detail img {{ max-width: 100%; }}
        footer {{ color: #888; font-size: 12px; padding: 20px; text-align: center; }}
    </style>
</head>
<body>
    <header>
        <a class="brand" href="/">Fyyur</a>
        <a href="/venues">Venues</a>
        <a href="/artists">Artists</a>
        <a href="/shows">Shows</a>
        <a href="/venues/create">Post a venue</a>
        <a href="/artists/create">Post an artist</a>
        <a href="/shows/create">Post a show</a>
    </header>
    <main>
        {flashes}
        {body}
    </main>
    <footer>fyyur-web {version} ({git_hash}, {profile})</footer>
</body>
</html>
"#,
        title = escape_html(title),
        flashes = flash_block(flashes),
        body = body,
        version = env!("CARGO_PKG_VERSION"),
        git_hash = env!("GIT_HASH"),
        profile = env!("BUILD_PROFILE"),
    )
}

/// Optional link, omitted when unset
pub(crate) fn link_row(label: &str, url: Option<&str>) -> String {
    match url {
        Some(url) => format!(
            r#"<p>{}: <a href="{url}" target="_blank" rel="noopener">{url}</a></p>"#,
            label,
            url = escape_html(url)
        ),
        None => String::new(),
    }
}

pub(crate) fn genre_tags(genres: &[String]) -> String {
    let tags: String = genres
        .iter()
        .map(|g| format!("<span>{}</span>", escape_html(g)))
        .collect();
    format!(r#"<div class="genres">{}</div>"#, tags)
}

pub(crate) fn image(url: Option<&str>, alt: &str) -> String {
    match url {
        Some(url) => format!(
            r#"<img src="{}" alt="{}">"#,
            escape_html(url),
            escape_html(alt)
        ),
        None => String::new(),
    }
}
