use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{Repository, RepositoryResult};
use crate::models::{
    Artist, ArtistInput, ArtistShow, Show, ShowInput, ShowListing, Venue, VenueInput, VenueShow,
};

#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Wraps `term` for `ILIKE` so that it matches as a literal substring.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl Repository for PgRepository {
    async fn list_venues(&self) -> RepositoryResult<Vec<Venue>> {
        let venues = sqlx::query_as::<_, Venue>("SELECT * FROM venues ORDER BY seq")
            .fetch_all(&self.pool)
            .await?;
        Ok(venues)
    }

    async fn search_venues(&self, term: &str) -> RepositoryResult<Vec<Venue>> {
        let venues = sqlx::query_as::<_, Venue>(
            "SELECT * FROM venues WHERE name ILIKE $1 ORDER BY seq",
        )
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await?;
        Ok(venues)
    }

    async fn find_venue(&self, id: Uuid) -> RepositoryResult<Option<Venue>> {
        let venue = sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(venue)
    }

    async fn insert_venue(&self, input: &VenueInput) -> RepositoryResult<Venue> {
        let mut tx = self.pool.begin().await?;
        let venue = sqlx::query_as::<_, Venue>(
            "INSERT INTO venues (name, city, state, address, phone, genres, facebook_link,
                                 image_link, website_link, seeking_talent, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING *",
        )
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.address)
        .bind(&input.phone)
        .bind(&input.genres)
        .bind(&input.facebook_link)
        .bind(&input.image_link)
        .bind(&input.website_link)
        .bind(input.seeking_talent)
        .bind(&input.seeking_description)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(venue)
    }

    async fn update_venue(&self, id: Uuid, input: &VenueInput) -> RepositoryResult<Option<Venue>> {
        let mut tx = self.pool.begin().await?;
        let venue = sqlx::query_as::<_, Venue>(
            "UPDATE venues
             SET name = $2, city = $3, state = $4, address = $5, phone = $6, genres = $7,
                 facebook_link = $8, image_link = $9, website_link = $10,
                 seeking_talent = $11, seeking_description = $12, updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.address)
        .bind(&input.phone)
        .bind(&input.genres)
        .bind(&input.facebook_link)
        .bind(&input.image_link)
        .bind(&input.website_link)
        .bind(input.seeking_talent)
        .bind(&input.seeking_description)
        .fetch_optional(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(venue)
    }

    async fn delete_venue(&self, id: Uuid) -> RepositoryResult<Option<Venue>> {
        let mut tx = self.pool.begin().await?;
        // shows.venue_id is ON DELETE CASCADE
        let venue = sqlx::query_as::<_, Venue>("DELETE FROM venues WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(venue)
    }

    async fn list_artists(&self) -> RepositoryResult<Vec<Artist>> {
        let artists = sqlx::query_as::<_, Artist>("SELECT * FROM artists ORDER BY seq")
            .fetch_all(&self.pool)
            .await?;
        Ok(artists)
    }

    async fn search_artists(&self, term: &str) -> RepositoryResult<Vec<Artist>> {
        let artists = sqlx::query_as::<_, Artist>(
            "SELECT * FROM artists WHERE name ILIKE $1 ORDER BY seq",
        )
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await?;
        Ok(artists)
    }

    async fn find_artist(&self, id: Uuid) -> RepositoryResult<Option<Artist>> {
        let artist = sqlx::query_as::<_, Artist>("SELECT * FROM artists WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(artist)
    }

    async fn insert_artist(&self, input: &ArtistInput) -> RepositoryResult<Artist> {
        let mut tx = self.pool.begin().await?;
        let artist = sqlx::query_as::<_, Artist>(
            "INSERT INTO artists (name, city, state, phone, genres, facebook_link, image_link,
                                  website_link, seeking_venue, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING *",
        )
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.phone)
        .bind(&input.genres)
        .bind(&input.facebook_link)
        .bind(&input.image_link)
        .bind(&input.website_link)
        .bind(input.seeking_venue)
        .bind(&input.seeking_description)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(artist)
    }

    async fn update_artist(
        &self,
        id: Uuid,
        input: &ArtistInput,
    ) -> RepositoryResult<Option<Artist>> {
        let mut tx = self.pool.begin().await?;
        let artist = sqlx::query_as::<_, Artist>(
            "UPDATE artists
             SET name = $2, city = $3, state = $4, phone = $5, genres = $6,
                 facebook_link = $7, image_link = $8, website_link = $9,
                 seeking_venue = $10, seeking_description = $11, updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.phone)
        .bind(&input.genres)
        .bind(&input.facebook_link)
        .bind(&input.image_link)
        .bind(&input.website_link)
        .bind(input.seeking_venue)
        .bind(&input.seeking_description)
        .fetch_optional(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(artist)
    }

    async fn list_shows(&self) -> RepositoryResult<Vec<ShowListing>> {
        let shows = sqlx::query_as::<_, ShowListing>(
            "SELECT s.venue_id, v.name AS venue_name,
                    s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                    s.start_time
             FROM shows s
             JOIN artists a ON a.id = s.artist_id
             JOIN venues v ON v.id = s.venue_id
             ORDER BY s.seq",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(shows)
    }

    async fn insert_show(&self, input: &ShowInput) -> RepositoryResult<Show> {
        let mut tx = self.pool.begin().await?;
        let show = sqlx::query_as::<_, Show>(
            "INSERT INTO shows (artist_id, venue_id, start_time)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(input.artist_id)
        .bind(input.venue_id)
        .bind(input.start_time)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(show)
    }

    async fn shows_at_venue(&self, venue_id: Uuid) -> RepositoryResult<Vec<VenueShow>> {
        let shows = sqlx::query_as::<_, VenueShow>(
            "SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                    s.start_time
             FROM shows s
             JOIN artists a ON a.id = s.artist_id
             WHERE s.venue_id = $1
             ORDER BY s.start_time, s.seq",
        )
        .bind(venue_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(shows)
    }

    async fn shows_by_artist(&self, artist_id: Uuid) -> RepositoryResult<Vec<ArtistShow>> {
        let shows = sqlx::query_as::<_, ArtistShow>(
            "SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
                    s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             WHERE s.artist_id = $1
             ORDER BY s.start_time, s.seq",
        )
        .bind(artist_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(shows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_wraps_term() {
        assert_eq!(like_pattern("abc"), "%abc%");
        assert_eq!(like_pattern(""), "%%");
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\"), "%c:\\\\%");
    }
}
