//! Artist database operations

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::info;

use super::{decode_genres, encode_genres, like_pattern};
use crate::models::{Artist, ArtistFields, ArtistId};
use crate::{Error, Result};

const ARTIST_COLUMNS: &str =
    "id, name, genres, city, state, phone, website, image_link, facebook_link";

fn artist_from_row(row: &SqliteRow) -> Result<Artist> {
    let genres: String = row.try_get("genres")?;

    Ok(Artist {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        genres: decode_genres(&genres)?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        phone: row.try_get("phone")?,
        website: row.try_get("website")?,
        image_link: row.try_get("image_link")?,
        facebook_link: row.try_get("facebook_link")?,
    })
}

/// Insert a new artist and return it with its assigned id
pub async fn insert_artist(pool: &SqlitePool, fields: &ArtistFields) -> Result<Artist> {
    let result = sqlx::query(
        r#"
        INSERT INTO artists (
            name, genres, city, state, phone, website, image_link, facebook_link
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&fields.name)
    .bind(encode_genres(&fields.genres)?)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.phone)
    .bind(&fields.website)
    .bind(&fields.image_link)
    .bind(&fields.facebook_link)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    info!("Artist {} '{}' was successfully listed", id, fields.name);

    Ok(fields.clone().into_artist(id))
}

/// Overwrite every editable field of an existing artist
pub async fn update_artist(
    pool: &SqlitePool,
    id: ArtistId,
    fields: &ArtistFields,
) -> Result<Artist> {
    let result = sqlx::query(
        r#"
        UPDATE artists SET
            name = ?, genres = ?, city = ?, state = ?, phone = ?,
            website = ?, image_link = ?, facebook_link = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&fields.name)
    .bind(encode_genres(&fields.genres)?)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.phone)
    .bind(&fields.website)
    .bind(&fields.image_link)
    .bind(&fields.facebook_link)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("artist {}", id)));
    }

    info!("Artist {} updated", id);
    Ok(fields.clone().into_artist(id))
}

/// Delete an artist; their shows go with them (ON DELETE CASCADE)
pub async fn delete_artist(pool: &SqlitePool, id: ArtistId) -> Result<()> {
    let result = sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("artist {}", id)));
    }

    info!("Artist {} deleted", id);
    Ok(())
}

pub async fn load_artist(pool: &SqlitePool, id: ArtistId) -> Result<Option<Artist>> {
    let row = sqlx::query(&format!("SELECT {} FROM artists WHERE id = ?", ARTIST_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(artist_from_row).transpose()
}

pub async fn list_artists(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let rows = sqlx::query(&format!("SELECT {} FROM artists ORDER BY id ASC", ARTIST_COLUMNS))
        .fetch_all(pool)
        .await?;

    rows.iter().map(artist_from_row).collect()
}

/// Case-insensitive substring search on artist name
pub async fn search_artists(pool: &SqlitePool, term: &str) -> Result<Vec<Artist>> {
    let rows = sqlx::query(&format!(
        r"SELECT {} FROM artists WHERE name LIKE ? ESCAPE '\' ORDER BY id ASC",
        ARTIST_COLUMNS
    ))
    .bind(like_pattern(term))
    .fetch_all(pool)
    .await?;

    rows.iter().map(artist_from_row).collect()
}

pub async fn artist_exists(pool: &SqlitePool, id: ArtistId) -> Result<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM artists WHERE id = ?)")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(exists)
}
