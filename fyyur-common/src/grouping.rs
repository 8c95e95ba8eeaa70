//! Venue grouping by area
//!
//! Venues are grouped into (city, state) areas by adjacent runs: a venue joins
//! the previous area only when it directly follows a venue with the same city
//! and state. Equal areas separated by another area in the input stay separate
//! groups, so callers that want one group per area must sort venues first.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Venue, VenueId};
use crate::partition::Scheduled;

/// Venue entry inside an area, with its live upcoming show count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueSummary {
    pub id: VenueId,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// One (city, state) run of venues
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

impl VenueArea {
    fn matches(&self, venue: &Venue) -> bool {
        self.city == venue.city && self.state == venue.state
    }
}

/// Count shows that start strictly after `now`
pub fn count_upcoming<S: Scheduled>(shows: &[S], now: DateTime<Utc>) -> usize {
    shows.iter().filter(|show| show.is_upcoming(now)).count()
}

/// Group `venues` into areas in input order
///
/// `shows_by_venue` supplies each venue's shows; a venue with no entry has
/// zero upcoming shows.
pub fn group_by_area<S: Scheduled>(
    venues: &[Venue],
    shows_by_venue: &HashMap<VenueId, Vec<S>>,
    now: DateTime<Utc>,
) -> Vec<VenueArea> {
    let mut areas: Vec<VenueArea> = Vec::new();

    for venue in venues {
        let summary = VenueSummary {
            id: venue.id,
            name: venue.name.clone(),
            num_upcoming_shows: shows_by_venue
                .get(&venue.id)
                .map(|shows| count_upcoming(shows, now))
                .unwrap_or(0),
        };

        match areas.last_mut() {
            Some(area) if area.matches(venue) => area.venues.push(summary),
            _ => areas.push(VenueArea {
                city: venue.city.clone(),
                state: venue.state.clone(),
                venues: vec![summary],
            }),
        }
    }

    areas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Show;
    use chrono::TimeZone;

    fn venue(id: VenueId, city: &str, state: &str) -> Venue {
        Venue {
            id,
            name: format!("Venue {}", id),
            genres: vec![],
            city: city.to_string(),
            state: state.to_string(),
            address: None,
            phone: None,
            website: None,
            image_link: None,
            facebook_link: None,
        }
    }

    fn show(id: i64, venue_id: VenueId, start_time: DateTime<Utc>) -> Show {
        Show {
            id,
            venue_id,
            artist_id: 4,
            start_time,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_contiguous_areas_merge() {
        let venues = vec![
            venue(1, "San Francisco", "CA"),
            venue(3, "San Francisco", "CA"),
            venue(2, "New York", "NY"),
        ];

        let areas = group_by_area::<Show>(&venues, &HashMap::new(), now());

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].city, "San Francisco");
        assert_eq!(areas[0].venues.iter().map(|v| v.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(areas[1].state, "NY");
        assert_eq!(areas[1].venues.len(), 1);
    }

    #[test]
    fn test_non_contiguous_areas_stay_separate() {
        let venues = vec![
            venue(1, "San Francisco", "CA"),
            venue(2, "New York", "NY"),
            venue(3, "San Francisco", "CA"),
        ];

        let areas = group_by_area::<Show>(&venues, &HashMap::new(), now());

        assert_eq!(areas.len(), 3);
        assert_eq!(areas[0].venues[0].id, 1);
        assert_eq!(areas[1].venues[0].id, 2);
        assert_eq!(areas[2].venues[0].id, 3);
        assert_eq!(areas[0].city, areas[2].city);
    }

    #[test]
    fn test_same_city_different_state_is_new_area() {
        let venues = vec![venue(1, "Portland", "OR"), venue(2, "Portland", "ME")];
        let areas = group_by_area::<Show>(&venues, &HashMap::new(), now());
        assert_eq!(areas.len(), 2);
    }

    #[test]
    fn test_areas_compare_city_and_state_separately() {
        // "AB" + "C" and "A" + "BC" concatenate to the same text
        let venues = vec![venue(1, "AB", "C"), venue(2, "A", "BC")];

        let areas = group_by_area::<Show>(&venues, &HashMap::new(), now());

        assert_eq!(areas.len(), 2);
        assert_eq!((areas[0].city.as_str(), areas[0].state.as_str()), ("AB", "C"));
        assert_eq!((areas[1].city.as_str(), areas[1].state.as_str()), ("A", "BC"));
    }

    #[test]
    fn test_empty_venues_yield_no_areas() {
        let areas = group_by_area::<Show>(&[], &HashMap::new(), now());
        assert!(areas.is_empty());
    }

    #[test]
    fn test_upcoming_counts_only_future_shows() {
        let venues = vec![venue(1, "San Francisco", "CA"), venue(3, "San Francisco", "CA")];
        let mut shows_by_venue = HashMap::new();
        shows_by_venue.insert(
            1,
            vec![show(1, 1, Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap())],
        );
        shows_by_venue.insert(
            3,
            vec![
                show(2, 3, Utc.with_ymd_and_hms(2019, 6, 15, 23, 0, 0).unwrap()),
                show(3, 3, Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap()),
                show(4, 3, Utc.with_ymd_and_hms(2035, 4, 8, 20, 0, 0).unwrap()),
                show(5, 3, now()),
            ],
        );

        let areas = group_by_area(&venues, &shows_by_venue, now());

        assert_eq!(areas[0].venues[0].num_upcoming_shows, 0);
        assert_eq!(areas[0].venues[1].num_upcoming_shows, 2);
    }

    #[test]
    fn test_venue_without_shows_has_zero_upcoming() {
        let venues = vec![venue(2, "New York", "NY")];
        let mut shows_by_venue: HashMap<VenueId, Vec<Show>> = HashMap::new();
        shows_by_venue.insert(2, Vec::new());

        let areas = group_by_area(&venues, &shows_by_venue, now());
        assert_eq!(areas[0].venues[0].num_upcoming_shows, 0);
    }

    #[test]
    fn test_grouping_is_idempotent() {
        let venues = vec![
            venue(1, "San Francisco", "CA"),
            venue(2, "New York", "NY"),
            venue(3, "San Francisco", "CA"),
        ];
        let mut shows_by_venue = HashMap::new();
        shows_by_venue.insert(
            3,
            vec![show(1, 3, Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap())],
        );

        let first = group_by_area(&venues, &shows_by_venue, now());
        let second = group_by_area(&venues, &shows_by_venue, now());
        assert_eq!(first, second);
    }

    #[test]
    fn test_area_serializes_presentation_keys() {
        let venues = vec![venue(1, "San Francisco", "CA")];
        let areas = group_by_area::<Show>(&venues, &HashMap::new(), now());

        let json = serde_json::to_value(&areas).unwrap();
        assert_eq!(json[0]["city"], "San Francisco");
        assert_eq!(json[0]["venues"][0]["id"], 1);
        assert_eq!(json[0]["venues"][0]["num_upcoming_shows"], 0);
    }
}
