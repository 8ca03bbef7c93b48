use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Repository, RepositoryError, RepositoryResult};
use crate::models::{
    Artist, ArtistInput, ArtistShow, Show, ShowInput, ShowListing, Venue, VenueInput, VenueShow,
};

#[derive(Default)]
struct Tables {
    venues: Vec<Venue>,
    artists: Vec<Artist>,
    shows: Vec<Show>,
}

/// In-process store. Rows live in insertion order; each write holds the lock
/// for its whole duration, so it is applied entirely or not at all.
#[derive(Default)]
pub struct MemoryRepository {
    tables: RwLock<Tables>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn name_matches(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(needle)
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn list_venues(&self) -> RepositoryResult<Vec<Venue>> {
        Ok(self.tables.read().await.venues.clone())
    }

    async fn search_venues(&self, term: &str) -> RepositoryResult<Vec<Venue>> {
        let needle = term.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .venues
            .iter()
            .filter(|venue| name_matches(&venue.name, &needle))
            .cloned()
            .collect())
    }

    async fn find_venue(&self, id: Uuid) -> RepositoryResult<Option<Venue>> {
        let tables = self.tables.read().await;
        Ok(tables.venues.iter().find(|venue| venue.id == id).cloned())
    }

    async fn insert_venue(&self, input: &VenueInput) -> RepositoryResult<Venue> {
        let venue = input.clone().into_venue(Uuid::new_v4(), Utc::now());
        self.tables.write().await.venues.push(venue.clone());
        Ok(venue)
    }

    async fn update_venue(&self, id: Uuid, input: &VenueInput) -> RepositoryResult<Option<Venue>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .venues
            .iter_mut()
            .find(|venue| venue.id == id)
            .map(|venue| {
                input.apply_to(venue, Utc::now());
                venue.clone()
            }))
    }

    async fn delete_venue(&self, id: Uuid) -> RepositoryResult<Option<Venue>> {
        let mut tables = self.tables.write().await;
        let Some(position) = tables.venues.iter().position(|venue| venue.id == id) else {
            return Ok(None);
        };
        let venue = tables.venues.remove(position);
        tables.shows.retain(|show| show.venue_id != id);
        Ok(Some(venue))
    }

    async fn list_artists(&self) -> RepositoryResult<Vec<Artist>> {
        Ok(self.tables.read().await.artists.clone())
    }

    async fn search_artists(&self, term: &str) -> RepositoryResult<Vec<Artist>> {
        let needle = term.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .artists
            .iter()
            .filter(|artist| name_matches(&artist.name, &needle))
            .cloned()
            .collect())
    }

    async fn find_artist(&self, id: Uuid) -> RepositoryResult<Option<Artist>> {
        let tables = self.tables.read().await;
        Ok(tables.artists.iter().find(|artist| artist.id == id).cloned())
    }

    async fn insert_artist(&self, input: &ArtistInput) -> RepositoryResult<Artist> {
        let artist = input.clone().into_artist(Uuid::new_v4(), Utc::now());
        self.tables.write().await.artists.push(artist.clone());
        Ok(artist)
    }

    async fn update_artist(
        &self,
        id: Uuid,
        input: &ArtistInput,
    ) -> RepositoryResult<Option<Artist>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .artists
            .iter_mut()
            .find(|artist| artist.id == id)
            .map(|artist| {
                input.apply_to(artist, Utc::now());
                artist.clone()
            }))
    }

    async fn list_shows(&self) -> RepositoryResult<Vec<ShowListing>> {
        let tables = self.tables.read().await;
        let listings = tables
            .shows
            .iter()
            .filter_map(|show| {
                let venue = tables.venues.iter().find(|v| v.id == show.venue_id)?;
                let artist = tables.artists.iter().find(|a| a.id == show.artist_id)?;
                Some(ShowListing {
                    venue_id: venue.id,
                    venue_name: venue.name.clone(),
                    artist_id: artist.id,
                    artist_name: artist.name.clone(),
                    artist_image_link: artist.image_link.clone(),
                    start_time: show.start_time,
                })
            })
            .collect();
        Ok(listings)
    }

    async fn insert_show(&self, input: &ShowInput) -> RepositoryResult<Show> {
        let mut tables = self.tables.write().await;
        if !tables.artists.iter().any(|a| a.id == input.artist_id) {
            return Err(RepositoryError::MissingReference {
                entity: "artist",
                id: input.artist_id,
            });
        }
        if !tables.venues.iter().any(|v| v.id == input.venue_id) {
            return Err(RepositoryError::MissingReference {
                entity: "venue",
                id: input.venue_id,
            });
        }

        let show = Show {
            id: Uuid::new_v4(),
            artist_id: input.artist_id,
            venue_id: input.venue_id,
            start_time: input.start_time,
            created_at: Utc::now(),
        };
        tables.shows.push(show.clone());
        Ok(show)
    }

    async fn shows_at_venue(&self, venue_id: Uuid) -> RepositoryResult<Vec<VenueShow>> {
        let tables = self.tables.read().await;
        let mut shows: Vec<VenueShow> = tables
            .shows
            .iter()
            .filter(|show| show.venue_id == venue_id)
            .filter_map(|show| {
                let artist = tables.artists.iter().find(|a| a.id == show.artist_id)?;
                Some(VenueShow {
                    artist_id: artist.id,
                    artist_name: artist.name.clone(),
                    artist_image_link: artist.image_link.clone(),
                    start_time: show.start_time,
                })
            })
            .collect();
        shows.sort_by_key(|show| show.start_time);
        Ok(shows)
    }

    async fn shows_by_artist(&self, artist_id: Uuid) -> RepositoryResult<Vec<ArtistShow>> {
        let tables = self.tables.read().await;
        let mut shows: Vec<ArtistShow> = tables
            .shows
            .iter()
            .filter(|show| show.artist_id == artist_id)
            .filter_map(|show| {
                let venue = tables.venues.iter().find(|v| v.id == show.venue_id)?;
                Some(ArtistShow {
                    venue_id: venue.id,
                    venue_name: venue.name.clone(),
                    venue_image_link: venue.image_link.clone(),
                    start_time: show.start_time,
                })
            })
            .collect();
        shows.sort_by_key(|show| show.start_time);
        Ok(shows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn venue_input(name: &str, city: &str, state: &str) -> VenueInput {
        VenueInput {
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: Some("123-123-1234".to_string()),
            genres: vec!["Jazz".to_string(), "Folk".to_string()],
            facebook_link: None,
            image_link: None,
            website_link: None,
            seeking_talent: true,
            seeking_description: Some("Looking for local acts".to_string()),
        }
    }

    fn artist_input(name: &str) -> ArtistInput {
        ArtistInput {
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: None,
            genres: vec!["Rock n Roll".to_string()],
            facebook_link: None,
            image_link: Some("https://images.example.com/a.png".to_string()),
            website_link: None,
            seeking_venue: false,
            seeking_description: None,
        }
    }

    #[tokio::test]
    async fn test_insert_then_find_venue() {
        let repo = MemoryRepository::new();
        let input = venue_input("The Musical Hop", "San Francisco", "CA");
        let created = repo.insert_venue(&input).await.unwrap();

        let found = repo.find_venue(created.id).await.unwrap().unwrap();
        assert_eq!(VenueInput::from(&found), input);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let repo = MemoryRepository::new();
        repo.insert_venue(&venue_input("ABC Lounge", "Austin", "TX"))
            .await
            .unwrap();
        repo.insert_venue(&venue_input("Park Square", "Austin", "TX"))
            .await
            .unwrap();

        let hits = repo.search_venues("abc").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "ABC Lounge");

        assert_eq!(repo.search_venues("").await.unwrap().len(), 2);
        assert!(repo.search_venues("nothing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_venue_returns_none() {
        let repo = MemoryRepository::new();
        let result = repo
            .update_venue(Uuid::new_v4(), &venue_input("Ghost", "Nowhere", "NV"))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_insert_show_rejects_dangling_references() {
        let repo = MemoryRepository::new();
        let venue = repo
            .insert_venue(&venue_input("Hall", "Boise", "ID"))
            .await
            .unwrap();

        let err = repo
            .insert_show(&ShowInput {
                artist_id: Uuid::new_v4(),
                venue_id: venue.id,
                start_time: Utc::now(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::MissingReference { entity: "artist", .. }
        ));
        assert!(repo.list_shows().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_venue_cascades_to_shows() {
        let repo = MemoryRepository::new();
        let venue = repo
            .insert_venue(&venue_input("Hall", "Boise", "ID"))
            .await
            .unwrap();
        let artist = repo.insert_artist(&artist_input("Guns N Petals")).await.unwrap();
        repo.insert_show(&ShowInput {
            artist_id: artist.id,
            venue_id: venue.id,
            start_time: Utc::now(),
        })
        .await
        .unwrap();

        let removed = repo.delete_venue(venue.id).await.unwrap();
        assert_eq!(removed.map(|v| v.id), Some(venue.id));
        assert!(repo.list_shows().await.unwrap().is_empty());
        assert!(repo.shows_by_artist(artist.id).await.unwrap().is_empty());
        assert!(repo.delete_venue(venue.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_shows_at_venue_are_ordered_by_start_time() {
        let repo = MemoryRepository::new();
        let venue = repo
            .insert_venue(&venue_input("Hall", "Boise", "ID"))
            .await
            .unwrap();
        let artist = repo.insert_artist(&artist_input("Matt Quevedo")).await.unwrap();
        let base = Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap();

        for offset in [3, 1, 2] {
            repo.insert_show(&ShowInput {
                artist_id: artist.id,
                venue_id: venue.id,
                start_time: base + Duration::days(offset),
            })
            .await
            .unwrap();
        }

        let starts: Vec<_> = repo
            .shows_at_venue(venue.id)
            .await
            .unwrap()
            .into_iter()
            .map(|show| show.start_time)
            .collect();
        assert_eq!(
            starts,
            vec![
                base + Duration::days(1),
                base + Duration::days(2),
                base + Duration::days(3)
            ]
        );
    }
}
