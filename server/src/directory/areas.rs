use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use super::timing::{classify, ShowTiming};
use crate::models::{ShowListing, Venue};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueSummary {
    pub id: Uuid,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Venues sharing one (city, state) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Groups venues by (city, state). Areas appear in the order their first
/// venue appears in `venues`; venues keep their order inside an area.
pub fn group_by_area(venues: Vec<Venue>, shows: &[ShowListing], now: DateTime<Utc>) -> Vec<Area> {
    let mut upcoming: HashMap<Uuid, usize> = HashMap::new();
    for show in shows {
        if classify(show.start_time, now) == Some(ShowTiming::Upcoming) {
            *upcoming.entry(show.venue_id).or_default() += 1;
        }
    }

    let mut areas: Vec<Area> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    for venue in venues {
        let summary = VenueSummary {
            id: venue.id,
            name: venue.name,
            num_upcoming_shows: upcoming.get(&venue.id).copied().unwrap_or(0),
        };
        let key = (venue.city, venue.state);
        match index.get(&key).copied() {
            Some(position) => areas[position].venues.push(summary),
            None => {
                index.insert(key.clone(), areas.len());
                areas.push(Area {
                    city: key.0,
                    state: key.1,
                    venues: vec![summary],
                });
            }
        }
    }
    areas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VenueInput;
    use chrono::{Duration, TimeZone};

    fn venue(name: &str, city: &str, state: &str) -> Venue {
        VenueInput {
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: "1 Main St".to_string(),
            phone: None,
            genres: vec!["Jazz".to_string()],
            facebook_link: None,
            image_link: None,
            website_link: None,
            seeking_talent: false,
            seeking_description: None,
        }
        .into_venue(Uuid::new_v4(), Utc::now())
    }

    #[test]
    fn test_same_city_and_state_share_an_area() {
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let venues = vec![
            venue("The Musical Hop", "San Francisco", "CA"),
            venue("The Dueling Pianos Bar", "New York", "NY"),
            venue("Park Square Live Music & Coffee", "San Francisco", "CA"),
            venue("Springfield Hall", "Springfield", "IL"),
            venue("Springfield Barn", "Springfield", "MO"),
        ];

        let areas = group_by_area(venues, &[], now);
        let keys: Vec<_> = areas
            .iter()
            .map(|a| (a.city.as_str(), a.state.as_str(), a.venues.len()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("San Francisco", "CA", 2),
                ("New York", "NY", 1),
                ("Springfield", "IL", 1),
                ("Springfield", "MO", 1),
            ]
        );
        assert_eq!(areas[0].venues[1].name, "Park Square Live Music & Coffee");
    }

    #[test]
    fn test_upcoming_show_counts() {
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let hop = venue("The Musical Hop", "San Francisco", "CA");
        let listing = |start_time| ShowListing {
            venue_id: hop.id,
            venue_name: hop.name.clone(),
            artist_id: Uuid::new_v4(),
            artist_name: "Guns N Petals".to_string(),
            artist_image_link: None,
            start_time,
        };
        let shows = vec![
            listing(now + Duration::days(3)),
            listing(now - Duration::days(3)),
            listing(now),
            listing(now + Duration::hours(1)),
        ];

        let areas = group_by_area(vec![hop.clone()], &shows, now);
        assert_eq!(areas[0].venues[0].num_upcoming_shows, 2);
    }
}
