//! Catalog views
//!
//! Read models for the presentation layer, composed from a [`ShowStore`],
//! the show partitioner and the venue grouper. `now` is always passed in so
//! a single request classifies every show against the same instant.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::grouping::{group_by_area, VenueArea};
use crate::models::{
    Artist, ArtistEntry, ArtistId, ArtistShow, ShowListing, Venue, VenueId, VenueShow,
};
use crate::partition::{partition, ShowPartition};
use crate::store::{ShowStore, ShowWindow};
use crate::{Error, Result};

/// Venue detail: venue fields plus its shows split around `now`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenuePage {
    #[serde(flatten)]
    pub venue: Venue,
    #[serde(flatten)]
    pub shows: ShowPartition<VenueShow>,
}

/// Artist detail: artist fields plus their shows split around `now`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistPage {
    #[serde(flatten)]
    pub artist: Artist,
    #[serde(flatten)]
    pub shows: ShowPartition<ArtistShow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub count: usize,
    pub data: Vec<SearchHit>,
}

impl From<Vec<SearchHit>> for SearchResult {
    fn from(data: Vec<SearchHit>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Venues grouped into (city, state) areas with upcoming show counts
pub async fn venue_areas<S>(store: &S, now: DateTime<Utc>) -> Result<Vec<VenueArea>>
where
    S: ShowStore + ?Sized,
{
    let venues = store.fetch_all_venues().await?;
    let shows = store.fetch_all_shows().await?;

    let mut shows_by_venue: HashMap<VenueId, Vec<ShowListing>> = HashMap::new();
    for show in shows {
        shows_by_venue.entry(show.venue_id).or_default().push(show);
    }

    Ok(group_by_area(&venues, &shows_by_venue, now))
}

pub async fn venue_page<S>(store: &S, id: VenueId, now: DateTime<Utc>) -> Result<VenuePage>
where
    S: ShowStore + ?Sized,
{
    let venue = store
        .fetch_venue(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("venue {}", id)))?;
    let shows = store.fetch_shows_for_venue(id, ShowWindow::all()).await?;

    Ok(VenuePage {
        venue,
        shows: partition(shows, now),
    })
}

pub async fn artist_page<S>(store: &S, id: ArtistId, now: DateTime<Utc>) -> Result<ArtistPage>
where
    S: ShowStore + ?Sized,
{
    let artist = store
        .fetch_artist(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("artist {}", id)))?;
    let shows = store.fetch_shows_for_artist(id, ShowWindow::all()).await?;

    Ok(ArtistPage {
        artist,
        shows: partition(shows, now),
    })
}

pub async fn venue_search<S>(store: &S, term: &str, now: DateTime<Utc>) -> Result<SearchResult>
where
    S: ShowStore + ?Sized,
{
    let venues = store.search_venues(term).await?;

    let mut hits = Vec::with_capacity(venues.len());
    for venue in venues {
        let upcoming = store
            .fetch_shows_for_venue(venue.id, ShowWindow::upcoming(now))
            .await?;
        hits.push(SearchHit {
            id: venue.id,
            name: venue.name,
            num_upcoming_shows: upcoming.len(),
        });
    }

    Ok(hits.into())
}

pub async fn artist_search<S>(store: &S, term: &str, now: DateTime<Utc>) -> Result<SearchResult>
where
    S: ShowStore + ?Sized,
{
    let artists = store.search_artists(term).await?;

    let mut hits = Vec::with_capacity(artists.len());
    for artist in artists {
        let upcoming = store
            .fetch_shows_for_artist(artist.id, ShowWindow::upcoming(now))
            .await?;
        hits.push(SearchHit {
            id: artist.id,
            name: artist.name,
            num_upcoming_shows: upcoming.len(),
        });
    }

    Ok(hits.into())
}

/// Every artist as `{ id, name }`
pub async fn artist_directory<S>(store: &S) -> Result<Vec<ArtistEntry>>
where
    S: ShowStore + ?Sized,
{
    let artists = store.fetch_all_artists().await?;
    Ok(artists.iter().map(ArtistEntry::from).collect())
}

/// Every show joined with venue and artist
pub async fn show_board<S>(store: &S) -> Result<Vec<ShowListing>>
where
    S: ShowStore + ?Sized,
{
    store.fetch_all_shows().await
}
