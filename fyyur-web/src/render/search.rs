//! Search result pages

use super::{escape_html, layout};
use crate::views::SearchResults;

/// Which listing a search ran against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Venues,
    Artists,
}

impl SearchKind {
    fn base(self) -> &'static str {
        match self {
            SearchKind::Venues => "/venues",
            SearchKind::Artists => "/artists",
        }
    }
}

pub fn search_page(kind: SearchKind, term: &str, results: &SearchResults) -> String {
    let items: String = results
        .data
        .iter()
        .map(|hit| {
            format!(
                r#"<li><a href="{}/{}">{}</a> <small>{} upcoming</small></li>"#,
                kind.base(),
                hit.id,
                escape_html(&hit.name),
                hit.num_upcoming_shows
            )
        })
        .collect();

    let body = format!(
        r#"<h3>Number of search results for "{term}": {count}</h3>
<form method="post" action="{base}/search"><input type="search" name="search_term" value="{term}"></form>
<ul class="results">{items}</ul>"#,
        term = escape_html(term),
        count = results.count,
        base = kind.base(),
        items = items,
    );
    layout("Search", &[], &body)
}
