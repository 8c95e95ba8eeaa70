//! Show database operations
//!
//! Shows are created once and never edited. Reads join the counterpart
//! entity with LEFT JOIN so that a dangling reference surfaces as
//! [`Error::InvalidShowReference`] instead of silently dropping the row.

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{info, warn};

use super::{artists::artist_exists, venues::venue_exists};
use crate::models::{ArtistId, ArtistShow, NewShow, Show, ShowId, ShowListing, VenueId, VenueShow};
use crate::store::ShowWindow;
use crate::time::to_storage_precision;
use crate::{Error, Result};

/// Insert a show after checking both references resolve
pub async fn insert_show(pool: &SqlitePool, show: &NewShow) -> Result<Show> {
    if !venue_exists(pool, show.venue_id).await? {
        return Err(Error::dangling_reference(format!("venue {} does not exist", show.venue_id)));
    }
    if !artist_exists(pool, show.artist_id).await? {
        return Err(Error::dangling_reference(format!("artist {} does not exist", show.artist_id)));
    }

    let start_time = to_storage_precision(show.start_time);

    let result = sqlx::query("INSERT INTO shows (venue_id, artist_id, start_time) VALUES (?, ?, ?)")
        .bind(show.venue_id)
        .bind(show.artist_id)
        .bind(start_time)
        .execute(pool)
        .await
        .map_err(|e| match e {
            // Venue or artist deleted between the check and the insert
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                Error::dangling_reference(format!(
                    "venue {} or artist {} no longer exists",
                    show.venue_id, show.artist_id
                ))
            }
            other => Error::Persistence(other),
        })?;

    let id = result.last_insert_rowid();
    info!(
        "Show {} listed: artist {} at venue {} on {}",
        id, show.artist_id, show.venue_id, start_time
    );

    Ok(Show {
        id,
        venue_id: show.venue_id,
        artist_id: show.artist_id,
        start_time,
    })
}

fn dangling(show_id: ShowId, reason: String) -> Error {
    warn!("Show {} has a dangling reference: {}", show_id, reason);
    Error::InvalidShowReference {
        show_id: Some(show_id),
        reason,
    }
}

fn venue_show_from_row(row: &SqliteRow) -> Result<VenueShow> {
    let show_id: ShowId = row.try_get("id")?;
    let artist_id: ArtistId = row.try_get("artist_id")?;
    let artist_name: Option<String> = row.try_get("artist_name")?;

    Ok(VenueShow {
        artist_id,
        artist_name: artist_name
            .ok_or_else(|| dangling(show_id, format!("artist {} does not exist", artist_id)))?,
        artist_image_link: row.try_get("artist_image_link")?,
        start_time: row.try_get("start_time")?,
    })
}

fn artist_show_from_row(row: &SqliteRow) -> Result<ArtistShow> {
    let show_id: ShowId = row.try_get("id")?;
    let venue_id: VenueId = row.try_get("venue_id")?;
    let venue_name: Option<String> = row.try_get("venue_name")?;

    Ok(ArtistShow {
        venue_id,
        venue_name: venue_name
            .ok_or_else(|| dangling(show_id, format!("venue {} does not exist", venue_id)))?,
        venue_image_link: row.try_get("venue_image_link")?,
        start_time: row.try_get("start_time")?,
    })
}

fn listing_from_row(row: &SqliteRow) -> Result<ShowListing> {
    let id: ShowId = row.try_get("id")?;
    let venue_id: VenueId = row.try_get("venue_id")?;
    let artist_id: ArtistId = row.try_get("artist_id")?;
    let venue_name: Option<String> = row.try_get("venue_name")?;
    let artist_name: Option<String> = row.try_get("artist_name")?;

    Ok(ShowListing {
        id,
        venue_id,
        venue_name: venue_name
            .ok_or_else(|| dangling(id, format!("venue {} does not exist", venue_id)))?,
        artist_id,
        artist_name: artist_name
            .ok_or_else(|| dangling(id, format!("artist {} does not exist", artist_id)))?,
        artist_image_link: row.try_get("artist_image_link")?,
        start_time: row.try_get("start_time")?,
    })
}

fn window_bounds(window: ShowWindow) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
    (window.after, window.before_or_equal)
}

/// Shows at a venue joined with their artist, earliest first
pub async fn shows_for_venue(
    pool: &SqlitePool,
    venue_id: VenueId,
    window: ShowWindow,
) -> Result<Vec<VenueShow>> {
    let (after, before_or_equal) = window_bounds(window);

    let rows = sqlx::query(
        r#"
        SELECT s.id, s.artist_id, s.start_time,
               a.name AS artist_name, a.image_link AS artist_image_link
        FROM shows s
        LEFT JOIN artists a ON a.id = s.artist_id
        WHERE s.venue_id = ?
          AND (? IS NULL OR s.start_time > ?)
          AND (? IS NULL OR s.start_time <= ?)
        ORDER BY s.start_time ASC, s.id ASC
        "#,
    )
    .bind(venue_id)
    .bind(after)
    .bind(after)
    .bind(before_or_equal)
    .bind(before_or_equal)
    .fetch_all(pool)
    .await?;

    rows.iter().map(venue_show_from_row).collect()
}

/// Shows by an artist joined with their venue, earliest first
pub async fn shows_for_artist(
    pool: &SqlitePool,
    artist_id: ArtistId,
    window: ShowWindow,
) -> Result<Vec<ArtistShow>> {
    let (after, before_or_equal) = window_bounds(window);

    let rows = sqlx::query(
        r#"
        SELECT s.id, s.venue_id, s.start_time,
               v.name AS venue_name, v.image_link AS venue_image_link
        FROM shows s
        LEFT JOIN venues v ON v.id = s.venue_id
        WHERE s.artist_id = ?
          AND (? IS NULL OR s.start_time > ?)
          AND (? IS NULL OR s.start_time <= ?)
        ORDER BY s.start_time ASC, s.id ASC
        "#,
    )
    .bind(artist_id)
    .bind(after)
    .bind(after)
    .bind(before_or_equal)
    .bind(before_or_equal)
    .fetch_all(pool)
    .await?;

    rows.iter().map(artist_show_from_row).collect()
}

/// Every show joined with venue and artist, earliest first
pub async fn list_shows(pool: &SqlitePool) -> Result<Vec<ShowListing>> {
    let rows = sqlx::query(
        r#"
        SELECT s.id, s.venue_id, s.artist_id, s.start_time,
               v.name AS venue_name,
               a.name AS artist_name, a.image_link AS artist_image_link
        FROM shows s
        LEFT JOIN venues v ON v.id = s.venue_id
        LEFT JOIN artists a ON a.id = s.artist_id
        ORDER BY s.start_time ASC, s.id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(listing_from_row).collect()
}
