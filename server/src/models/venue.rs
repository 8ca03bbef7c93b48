use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Venue {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Every mutable attribute of a venue. Used for both inserts and full-replace updates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl From<&Venue> for VenueInput {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            genres: venue.genres.clone(),
            facebook_link: venue.facebook_link.clone(),
            image_link: venue.image_link.clone(),
            website_link: venue.website_link.clone(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone(),
        }
    }
}

impl VenueInput {
    /// Builds the stored record for a fresh insert.
    pub fn into_venue(self, id: Uuid, now: DateTime<Utc>) -> Venue {
        Venue {
            id,
            name: self.name,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: self.phone,
            genres: self.genres,
            facebook_link: self.facebook_link,
            image_link: self.image_link,
            website_link: self.website_link,
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites every mutable field of `venue`; nothing from the old record survives.
    pub fn apply_to(&self, venue: &mut Venue, now: DateTime<Utc>) {
        venue.name = self.name.clone();
        venue.city = self.city.clone();
        venue.state = self.state.clone();
        venue.address = self.address.clone();
        venue.phone = self.phone.clone();
        venue.genres = self.genres.clone();
        venue.facebook_link = self.facebook_link.clone();
        venue.image_link = self.image_link.clone();
        venue.website_link = self.website_link.clone();
        venue.seeking_talent = self.seeking_talent;
        venue.seeking_description = self.seeking_description.clone();
        venue.updated_at = now;
    }
}
