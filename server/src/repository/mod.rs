//! Persistence for venues, artists and shows.
//!
//! Handlers only see the [`Repository`] trait. Two backends implement it:
//! [`PgRepository`] over a sqlx connection pool, and [`MemoryRepository`],
//! an in-process store used when no database is configured and by the tests.
//!
//! Every write runs in its own transaction: it either commits as a whole or
//! leaves no trace.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    Artist, ArtistInput, ArtistShow, Show, ShowInput, ShowListing, Venue, VenueInput, VenueShow,
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryRepository;
pub use postgres::PgRepository;

/// A write or read rejected by the store.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{entity} {id} does not exist")]
    MissingReference { entity: &'static str, id: Uuid },
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[async_trait]
pub trait Repository: Send + Sync {
    /// All venues in insertion order.
    async fn list_venues(&self) -> RepositoryResult<Vec<Venue>>;

    /// Venues whose name contains `term`, ignoring case. An empty term matches every venue.
    async fn search_venues(&self, term: &str) -> RepositoryResult<Vec<Venue>>;

    async fn find_venue(&self, id: Uuid) -> RepositoryResult<Option<Venue>>;

    async fn insert_venue(&self, input: &VenueInput) -> RepositoryResult<Venue>;

    /// Replaces every mutable field. Returns `None` when no venue has this id.
    async fn update_venue(&self, id: Uuid, input: &VenueInput) -> RepositoryResult<Option<Venue>>;

    /// Removes the venue and the shows booked there. Returns the removed record.
    async fn delete_venue(&self, id: Uuid) -> RepositoryResult<Option<Venue>>;

    async fn list_artists(&self) -> RepositoryResult<Vec<Artist>>;

    async fn search_artists(&self, term: &str) -> RepositoryResult<Vec<Artist>>;

    async fn find_artist(&self, id: Uuid) -> RepositoryResult<Option<Artist>>;

    async fn insert_artist(&self, input: &ArtistInput) -> RepositoryResult<Artist>;

    async fn update_artist(
        &self,
        id: Uuid,
        input: &ArtistInput,
    ) -> RepositoryResult<Option<Artist>>;

    /// All shows joined with their venue and artist, in insertion order.
    async fn list_shows(&self) -> RepositoryResult<Vec<ShowListing>>;

    /// Fails with [`RepositoryError`] when the artist or venue does not exist.
    async fn insert_show(&self, input: &ShowInput) -> RepositoryResult<Show>;

    /// Shows booked at a venue, ordered by start time.
    async fn shows_at_venue(&self, venue_id: Uuid) -> RepositoryResult<Vec<VenueShow>>;

    /// Shows played by an artist, ordered by start time.
    async fn shows_by_artist(&self, artist_id: Uuid) -> RepositoryResult<Vec<ArtistShow>>;
}
