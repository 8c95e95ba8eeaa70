//! Venue database operations

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::info;

use super::{decode_genres, encode_genres, like_pattern};
use crate::models::{Venue, VenueFields, VenueId};
use crate::{Error, Result};

const VENUE_COLUMNS: &str =
    "id, name, genres, city, state, address, phone, website, image_link, facebook_link";

fn venue_from_row(row: &SqliteRow) -> Result<Venue> {
    let genres: String = row.try_get("genres")?;

    Ok(Venue {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        genres: decode_genres(&genres)?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        address: row.try_get("address")?,
        phone: row.try_get("phone")?,
        website: row.try_get("website")?,
        image_link: row.try_get("image_link")?,
        facebook_link: row.try_get("facebook_link")?,
    })
}

/// Insert a new venue and return it with its assigned id
pub async fn insert_venue(pool: &SqlitePool, fields: &VenueFields) -> Result<Venue> {
    let result = sqlx::query(
        r#"
        INSERT INTO venues (
            name, genres, city, state, address, phone, website, image_link, facebook_link
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&fields.name)
    .bind(encode_genres(&fields.genres)?)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.address)
    .bind(&fields.phone)
    .bind(&fields.website)
    .bind(&fields.image_link)
    .bind(&fields.facebook_link)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    info!("Venue {} '{}' was successfully listed", id, fields.name);

    Ok(fields.clone().into_venue(id))
}

/// Overwrite every editable field of an existing venue
pub async fn update_venue(pool: &SqlitePool, id: VenueId, fields: &VenueFields) -> Result<Venue> {
    let result = sqlx::query(
        r#"
        UPDATE venues SET
            name = ?, genres = ?, city = ?, state = ?, address = ?, phone = ?,
            website = ?, image_link = ?, facebook_link = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&fields.name)
    .bind(encode_genres(&fields.genres)?)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.address)
    .bind(&fields.phone)
    .bind(&fields.website)
    .bind(&fields.image_link)
    .bind(&fields.facebook_link)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("venue {}", id)));
    }

    info!("Venue {} updated", id);
    Ok(fields.clone().into_venue(id))
}

/// Delete a venue; its shows go with it (ON DELETE CASCADE)
pub async fn delete_venue(pool: &SqlitePool, id: VenueId) -> Result<()> {
    let result = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("venue {}", id)));
    }

    info!("Venue {} deleted", id);
    Ok(())
}

pub async fn load_venue(pool: &SqlitePool, id: VenueId) -> Result<Option<Venue>> {
    let row = sqlx::query(&format!("SELECT {} FROM venues WHERE id = ?", VENUE_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(venue_from_row).transpose()
}

/// All venues in id order
pub async fn list_venues(pool: &SqlitePool) -> Result<Vec<Venue>> {
    let rows = sqlx::query(&format!("SELECT {} FROM venues ORDER BY id ASC", VENUE_COLUMNS))
        .fetch_all(pool)
        .await?;

    rows.iter().map(venue_from_row).collect()
}

/// Case-insensitive substring search on venue name
pub async fn search_venues(pool: &SqlitePool, term: &str) -> Result<Vec<Venue>> {
    let rows = sqlx::query(&format!(
        r"SELECT {} FROM venues WHERE name LIKE ? ESCAPE '\' ORDER BY id ASC",
        VENUE_COLUMNS
    ))
    .bind(like_pattern(term))
    .fetch_all(pool)
    .await?;

    rows.iter().map(venue_from_row).collect()
}

pub async fn venue_exists(pool: &SqlitePool, id: VenueId) -> Result<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM venues WHERE id = ?)")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(exists)
}
