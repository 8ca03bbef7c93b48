use serde::Serialize;
use uuid::Uuid;

use crate::models::{Artist, Venue};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub id: Uuid,
    pub name: String,
}

impl From<Venue> for SearchHit {
    fn from(venue: Venue) -> Self {
        Self {
            id: venue.id,
            name: venue.name,
        }
    }
}

impl From<Artist> for SearchHit {
    fn from(artist: Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub search_term: String,
    pub count: usize,
    pub data: Vec<SearchHit>,
}

impl SearchResults {
    pub fn new<T: Into<SearchHit>>(search_term: String, matches: Vec<T>) -> Self {
        let data: Vec<SearchHit> = matches.into_iter().map(Into::into).collect();
        Self {
            search_term,
            count: data.len(),
            data,
        }
    }
}
