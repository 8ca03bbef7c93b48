use chrono::{DateTime, Utc};

use crate::models::{ArtistShow, VenueShow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTiming {
    Past,
    Upcoming,
}

/// Where a show stands relative to `now`. A show starting exactly at `now`
/// is neither past nor upcoming.
pub fn classify(start_time: DateTime<Utc>, now: DateTime<Utc>) -> Option<ShowTiming> {
    if start_time < now {
        Some(ShowTiming::Past)
    } else if start_time > now {
        Some(ShowTiming::Upcoming)
    } else {
        None
    }
}

pub trait Scheduled {
    fn start_time(&self) -> DateTime<Utc>;
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

/// Splits shows into `(past, upcoming)`, keeping their relative order.
pub fn partition<T: Scheduled>(shows: Vec<T>, now: DateTime<Utc>) -> (Vec<T>, Vec<T>) {
    let mut past = Vec::new();
    let mut upcoming = Vec::new();
    for show in shows {
        match classify(show.start_time(), now) {
            Some(ShowTiming::Past) => past.push(show),
            Some(ShowTiming::Upcoming) => upcoming.push(show),
            None => {}
        }
    }
    (past, upcoming)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use uuid::Uuid;

    fn show_at(start_time: DateTime<Utc>) -> VenueShow {
        VenueShow {
            artist_id: Uuid::new_v4(),
            artist_name: "The Wild Sax Band".to_string(),
            artist_image_link: None,
            start_time,
        }
    }

    #[test]
    fn test_classify_boundaries() {
        let now = Utc.with_ymd_and_hms(2030, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(classify(now - Duration::seconds(1), now), Some(ShowTiming::Past));
        assert_eq!(classify(now + Duration::seconds(1), now), Some(ShowTiming::Upcoming));
        assert_eq!(classify(now, now), None);
    }

    #[test]
    fn test_partition_drops_shows_starting_now() {
        let now = Utc.with_ymd_and_hms(2030, 6, 15, 12, 0, 0).unwrap();
        let shows = vec![
            show_at(now - Duration::days(2)),
            show_at(now),
            show_at(now + Duration::days(1)),
            show_at(now - Duration::days(1)),
        ];

        let (past, upcoming) = partition(shows, now);
        assert_eq!(past.len(), 2);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(past[0].start_time, now - Duration::days(2));
        assert_eq!(upcoming[0].start_time, now + Duration::days(1));
    }
}
