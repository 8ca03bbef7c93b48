use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Artist {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl From<&Artist> for ArtistInput {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            genres: artist.genres.clone(),
            facebook_link: artist.facebook_link.clone(),
            image_link: artist.image_link.clone(),
            website_link: artist.website_link.clone(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone(),
        }
    }
}

impl ArtistInput {
    pub fn into_artist(self, id: Uuid, now: DateTime<Utc>) -> Artist {
        Artist {
            id,
            name: self.name,
            city: self.city,
            state: self.state,
            phone: self.phone,
            genres: self.genres,
            facebook_link: self.facebook_link,
            image_link: self.image_link,
            website_link: self.website_link,
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_to(&self, artist: &mut Artist, now: DateTime<Utc>) {
        artist.name = self.name.clone();
        artist.city = self.city.clone();
        artist.state = self.state.clone();
        artist.phone = self.phone.clone();
        artist.genres = self.genres.clone();
        artist.facebook_link = self.facebook_link.clone();
        artist.image_link = self.image_link.clone();
        artist.website_link = self.website_link.clone();
        artist.seeking_venue = self.seeking_venue;
        artist.seeking_description = self.seeking_description.clone();
        artist.updated_at = now;
    }
}
