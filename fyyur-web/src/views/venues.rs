//! Venue detail and area grouping

use chrono::NaiveDateTime;
use fyyur_common::db::{ShowListing, Venue};
use serde::Serialize;
use std::collections::HashMap;

use super::shows::{partition_shows, ShowSchedule};
use crate::db::venues::AreaKey;

/// Venue with its shows split into past and upcoming
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueDetail {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    #[serde(flatten)]
    pub schedule: ShowSchedule,
}

impl VenueDetail {
    pub fn new(venue: &Venue, shows: &[ShowListing], now: NaiveDateTime) -> Self {
        Self {
            id: venue.id,
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            image_link: venue.image_link.clone(),
            facebook_link: venue.facebook_link.clone(),
            website_link: venue.website_link.clone(),
            genres: venue.genres.clone(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone(),
            schedule: partition_shows(shows, now),
        }
    }
}

/// Venues sharing one city/state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueDetail>,
}

/// One `Area` per entry of `areas`, in that order
///
/// A venue lands in the area matching both its city and state. Venue order
/// within an area follows `venues`.
pub fn group_by_area(
    areas: &[AreaKey],
    venues: &[Venue],
    shows_by_venue: &HashMap<i64, Vec<ShowListing>>,
    now: NaiveDateTime,
) -> Vec<Area> {
    areas
        .iter()
        .map(|area| Area {
            city: area.city.clone(),
            state: area.state.clone(),
            venues: venues
                .iter()
                .filter(|v| v.city == area.city && v.state == area.state)
                .map(|v| {
                    let shows = shows_by_venue.get(&v.id).map(Vec::as_slice).unwrap_or(&[]);
                    VenueDetail::new(v, shows, now)
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::shows::tests::{listing, now};
    use chrono::Duration;

    fn venue(id: i64, name: &str, city: &str, state: &str) -> Venue {
        Venue {
            id,
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: "1 Main St".to_string(),
            phone: None,
            image_link: None,
            facebook_link: None,
            website_link: None,
            genres: vec!["Jazz".to_string()],
            seeking_talent: false,
            seeking_description: None,
        }
    }

    fn area(city: &str, state: &str) -> AreaKey {
        AreaKey {
            city: city.to_string(),
            state: state.to_string(),
        }
    }

    #[test]
    fn test_group_by_area_follows_area_order() {
        let venues = vec![
            venue(1, "The Musical Hop", "San Francisco", "CA"),
            venue(2, "The Dueling Pianos Bar", "New York", "NY"),
            venue(3, "Park Square Live Music & Coffee", "San Francisco", "CA"),
        ];
        let areas = vec![area("New York", "NY"), area("San Francisco", "CA")];

        let grouped = group_by_area(&areas, &venues, &HashMap::new(), now());

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].city, "New York");
        assert_eq!(grouped[0].venues.len(), 1);
        assert_eq!(grouped[1].city, "San Francisco");
        let names: Vec<&str> = grouped[1].venues.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["The Musical Hop", "Park Square Live Music & Coffee"]);
    }

    #[test]
    fn test_same_city_different_state_kept_apart() {
        let venues = vec![
            venue(1, "Crystal Ballroom", "Portland", "OR"),
            venue(2, "State Theatre", "Portland", "ME"),
        ];
        let areas = vec![area("Portland", "OR"), area("Portland", "ME")];

        let grouped = group_by_area(&areas, &venues, &HashMap::new(), now());

        assert_eq!(grouped[0].venues[0].name, "Crystal Ballroom");
        assert_eq!(grouped[0].venues.len(), 1);
        assert_eq!(grouped[1].venues[0].name, "State Theatre");
    }

    #[test]
    fn test_area_venues_carry_schedules() {
        let venues = vec![venue(5, "Hop", "San Francisco", "CA")];
        let mut shows = HashMap::new();
        shows.insert(
            5,
            vec![
                listing(1, 5, 1, now() - Duration::days(2)),
                listing(2, 5, 1, now() + Duration::days(2)),
                listing(3, 5, 2, now() + Duration::days(3)),
            ],
        );

        let grouped = group_by_area(&[area("San Francisco", "CA")], &venues, &shows, now());
        let detail = &grouped[0].venues[0];

        assert_eq!(detail.schedule.past_shows_count, 1);
        assert_eq!(detail.schedule.upcoming_shows_count, 2);
    }
}
