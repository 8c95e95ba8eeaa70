//! Storage collaborator
//!
//! [`ShowStore`] is the read interface the catalog views are written
//! against. [`SqliteStore`] implements it over a connection pool that is
//! handed in explicitly; nothing here holds global state.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::db;
use crate::models::{Artist, ArtistId, ArtistShow, ShowListing, Venue, VenueId, VenueShow};
use crate::Result;

/// Start-time bounds for show queries
///
/// `after` is exclusive and `before_or_equal` inclusive, matching the
/// upcoming/past split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShowWindow {
    pub after: Option<DateTime<Utc>>,
    pub before_or_equal: Option<DateTime<Utc>>,
}

impl ShowWindow {
    /// No bounds
    pub fn all() -> Self {
        Self::default()
    }

    /// Shows starting strictly after `now`
    pub fn upcoming(now: DateTime<Utc>) -> Self {
        Self {
            after: Some(now),
            before_or_equal: None,
        }
    }

    /// Shows starting at or before `now`
    pub fn past(now: DateTime<Utc>) -> Self {
        Self {
            after: None,
            before_or_equal: Some(now),
        }
    }
}

#[async_trait]
pub trait ShowStore: Send + Sync {
    /// All venues in storage order (ascending id)
    async fn fetch_all_venues(&self) -> Result<Vec<Venue>>;

    async fn fetch_venue(&self, id: VenueId) -> Result<Option<Venue>>;

    async fn fetch_all_artists(&self) -> Result<Vec<Artist>>;

    async fn fetch_artist(&self, id: ArtistId) -> Result<Option<Artist>>;

    /// Every show joined with both venue and artist
    async fn fetch_all_shows(&self) -> Result<Vec<ShowListing>>;

    /// Shows at a venue joined with the performing artist
    async fn fetch_shows_for_venue(
        &self,
        venue_id: VenueId,
        window: ShowWindow,
    ) -> Result<Vec<VenueShow>>;

    /// Shows by an artist joined with the hosting venue
    async fn fetch_shows_for_artist(
        &self,
        artist_id: ArtistId,
        window: ShowWindow,
    ) -> Result<Vec<ArtistShow>>;

    async fn search_venues(&self, term: &str) -> Result<Vec<Venue>>;

    async fn search_artists(&self, term: &str) -> Result<Vec<Artist>>;
}

/// [`ShowStore`] backed by SQLite
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ShowStore for SqliteStore {
    async fn fetch_all_venues(&self) -> Result<Vec<Venue>> {
        db::venues::list_venues(&self.pool).await
    }

    async fn fetch_venue(&self, id: VenueId) -> Result<Option<Venue>> {
        db::venues::load_venue(&self.pool, id).await
    }

    async fn fetch_all_artists(&self) -> Result<Vec<Artist>> {
        db::artists::list_artists(&self.pool).await
    }

    async fn fetch_artist(&self, id: ArtistId) -> Result<Option<Artist>> {
        db::artists::load_artist(&self.pool, id).await
    }

    async fn fetch_all_shows(&self) -> Result<Vec<ShowListing>> {
        db::shows::list_shows(&self.pool).await
    }

    async fn fetch_shows_for_venue(
        &self,
        venue_id: VenueId,
        window: ShowWindow,
    ) -> Result<Vec<VenueShow>> {
        db::shows::shows_for_venue(&self.pool, venue_id, window).await
    }

    async fn fetch_shows_for_artist(
        &self,
        artist_id: ArtistId,
        window: ShowWindow,
    ) -> Result<Vec<ArtistShow>> {
        db::shows::shows_for_artist(&self.pool, artist_id, window).await
    }

    async fn search_venues(&self, term: &str) -> Result<Vec<Venue>> {
        db::venues::search_venues(&self.pool, term).await
    }

    async fn search_artists(&self, term: &str) -> Result<Vec<Artist>> {
        db::artists::search_artists(&self.pool, term).await
    }
}
