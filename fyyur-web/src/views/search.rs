//! Search result mapping

use chrono::NaiveDateTime;
use fyyur_common::db::{Artist, ShowListing, Venue};
use serde::Serialize;
use std::collections::HashMap;

use super::shows::count_upcoming;

/// Record that can appear in name search results
pub trait Listing {
    fn id(&self) -> i64;
    fn name(&self) -> &str;
}

impl Listing for Venue {
    fn id(&self) -> i64 {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl Listing for Artist {
    fn id(&self) -> i64 {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

/// One matching record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Every match plus the match count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchHit>,
}

/// Map matched records to hits, counting each record's upcoming shows
pub fn search_results<T: Listing>(
    matches: &[T],
    shows_by_id: &HashMap<i64, Vec<ShowListing>>,
    now: NaiveDateTime,
) -> SearchResults {
    let data: Vec<SearchHit> = matches
        .iter()
        .map(|m| SearchHit {
            id: m.id(),
            name: m.name().to_string(),
            num_upcoming_shows: shows_by_id
                .get(&m.id())
                .map(|shows| count_upcoming(shows, now))
                .unwrap_or(0),
        })
        .collect();

    SearchResults {
        count: data.len(),
        data,
    }
}
