//! Past/upcoming show partitioning

use chrono::NaiveDateTime;
use fyyur_common::db::ShowListing;
use serde::Serialize;

/// Show as displayed on venue, artist and listing pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowCard {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

impl From<&ShowListing> for ShowCard {
    fn from(show: &ShowListing) -> Self {
        Self {
            venue_id: show.venue_id,
            venue_name: show.venue_name.clone(),
            venue_image_link: show.venue_image_link.clone(),
            artist_id: show.artist_id,
            artist_name: show.artist_name.clone(),
            artist_image_link: show.artist_image_link.clone(),
            start_time: show.start_time,
        }
    }
}

/// Shows split around a reference time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShowSchedule {
    pub past_shows: Vec<ShowCard>,
    pub upcoming_shows: Vec<ShowCard>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// A show is past when it started strictly before `now`
pub fn is_past(start_time: &NaiveDateTime, now: &NaiveDateTime) -> bool {
    start_time < now
}

/// Split `shows` into past and upcoming, keeping input order in each half
///
/// A show starting exactly at `now` is upcoming.
pub fn partition_shows(shows: &[ShowListing], now: NaiveDateTime) -> ShowSchedule {
    let (past, upcoming): (Vec<&ShowListing>, Vec<&ShowListing>) =
        shows.iter().partition(|s| is_past(&s.start_time, &now));

    let past_shows: Vec<ShowCard> = past.into_iter().map(ShowCard::from).collect();
    let upcoming_shows: Vec<ShowCard> = upcoming.into_iter().map(ShowCard::from).collect();

    ShowSchedule {
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }
}

/// Number of shows starting at or after `now`
pub fn count_upcoming(shows: &[ShowListing], now: NaiveDateTime) -> usize {
    shows.iter().filter(|s| !is_past(&s.start_time, &now)).count()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    pub(crate) fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    pub(crate) fn listing(id: i64, venue_id: i64, artist_id: i64, start_time: NaiveDateTime) -> ShowListing {
        ShowListing {
            id,
            venue_id,
            venue_name: format!("Venue {}", venue_id),
            venue_image_link: Some(format!("https://img.example/v{}.jpg", venue_id)),
            artist_id,
            artist_name: format!("Artist {}", artist_id),
            artist_image_link: None,
            start_time,
        }
    }

    #[test]
    fn test_partition_splits_on_now() {
        let shows = vec![
            listing(1, 1, 1, now() - Duration::days(30)),
            listing(2, 1, 2, now() + Duration::days(1)),
            listing(3, 1, 3, now() - Duration::minutes(1)),
            listing(4, 1, 1, now() + Duration::days(60)),
        ];

        let schedule = partition_shows(&shows, now());

        assert_eq!(schedule.past_shows_count, 2);
        assert_eq!(schedule.upcoming_shows_count, 2);
        let past_artists: Vec<i64> = schedule.past_shows.iter().map(|s| s.artist_id).collect();
        let upcoming_artists: Vec<i64> = schedule.upcoming_shows.iter().map(|s| s.artist_id).collect();
        assert_eq!(past_artists, vec![1, 3], "past keeps input order");
        assert_eq!(upcoming_artists, vec![2, 1], "upcoming keeps input order");
    }

    #[test]
    fn test_show_starting_now_is_upcoming() {
        let shows = vec![listing(1, 1, 1, now())];
        let schedule = partition_shows(&shows, now());

        assert_eq!(schedule.past_shows_count, 0);
        assert_eq!(schedule.upcoming_shows_count, 1);
        assert_eq!(count_upcoming(&shows, now()), 1);
    }

    #[test]
    fn test_card_carries_denormalized_names() {
        let shows = vec![listing(9, 4, 7, now() + Duration::hours(2))];
        let schedule = partition_shows(&shows, now());
        let card = &schedule.upcoming_shows[0];

        assert_eq!(card.venue_id, 4);
        assert_eq!(card.venue_name, "Venue 4");
        assert_eq!(card.venue_image_link.as_deref(), Some("https://img.example/v4.jpg"));
        assert_eq!(card.artist_id, 7);
        assert_eq!(card.artist_name, "Artist 7");
        assert_eq!(card.artist_image_link, None);
    }

    #[test]
    fn test_empty_input() {
        let schedule = partition_shows(&[], now());
        assert_eq!(schedule, ShowSchedule::default());
    }
}
