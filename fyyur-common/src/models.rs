//! Domain models
//!
//! Records as stored (`Venue`, `Artist`, `Show`), the joined show projections
//! returned by the storage layer, and the submitted forms with their
//! validation into write-ready field sets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::partition::Scheduled;
use crate::{Error, Result};

pub type VenueId = i64;
pub type ArtistId = i64;
pub type ShowId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
}

/// Short artist entry for the artist directory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistEntry {
    pub id: ArtistId,
    pub name: String,
}

impl From<&Artist> for ArtistEntry {
    fn from(artist: &Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: ShowId,
    pub venue_id: VenueId,
    pub artist_id: ArtistId,
    pub start_time: DateTime<Utc>,
}

/// A show seen from its venue: the performing artist plus start time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueShow {
    pub artist_id: ArtistId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// A show seen from its artist: the hosting venue plus start time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistShow {
    pub venue_id: VenueId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// A show joined with both sides, as listed on the show board
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowListing {
    pub id: ShowId,
    pub venue_id: VenueId,
    pub venue_name: String,
    pub artist_id: ArtistId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl Scheduled for Show {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

impl Scheduled for ShowListing {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

// ========================================
// Forms
// ========================================

/// Venue form as submitted for create/edit
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
}

/// Validated venue fields, ready to insert or overwrite
#[derive(Debug, Clone, PartialEq)]
pub struct VenueFields {
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
}

impl VenueForm {
    pub fn validate(self) -> Result<VenueFields> {
        Ok(VenueFields {
            name: required("name", &self.name)?,
            genres: clean_genres(self.genres),
            city: required("city", &self.city)?,
            state: required("state", &self.state)?,
            address: optional(self.address),
            phone: optional(self.phone),
            website: optional(self.website),
            image_link: optional(self.image_link),
            facebook_link: optional(self.facebook_link),
        })
    }
}

impl VenueFields {
    pub fn into_venue(self, id: VenueId) -> Venue {
        Venue {
            id,
            name: self.name,
            genres: self.genres,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: self.phone,
            website: self.website,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
        }
    }
}

/// Artist form as submitted for create/edit
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
}

/// Validated artist fields, ready to insert or overwrite
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistFields {
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
}

impl ArtistForm {
    pub fn validate(self) -> Result<ArtistFields> {
        Ok(ArtistFields {
            name: required("name", &self.name)?,
            genres: clean_genres(self.genres),
            city: required("city", &self.city)?,
            state: required("state", &self.state)?,
            phone: optional(self.phone),
            website: optional(self.website),
            image_link: optional(self.image_link),
            facebook_link: optional(self.facebook_link),
        })
    }
}

impl ArtistFields {
    pub fn into_artist(self, id: ArtistId) -> Artist {
        Artist {
            id,
            name: self.name,
            genres: self.genres,
            city: self.city,
            state: self.state,
            phone: self.phone,
            website: self.website,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
        }
    }
}

/// Show form as submitted
#[derive(Debug, Clone, Deserialize)]
pub struct ShowForm {
    pub venue_id: VenueId,
    pub artist_id: ArtistId,
    pub start_time: String,
}

/// Validated show, references not yet checked against storage
#[derive(Debug, Clone, PartialEq)]
pub struct NewShow {
    pub venue_id: VenueId,
    pub artist_id: ArtistId,
    pub start_time: DateTime<Utc>,
}

impl ShowForm {
    pub fn validate(self) -> Result<NewShow> {
        let start_time = crate::time::parse_start_time(&self.start_time).ok_or_else(|| {
            Error::InvalidInput(format!("start_time is not a valid date/time: '{}'", self.start_time))
        })?;

        Ok(NewShow {
            venue_id: self.venue_id,
            artist_id: self.artist_id,
            start_time,
        })
    }
}

fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn clean_genres(genres: Vec<String>) -> Vec<String> {
    genres
        .into_iter()
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty())
        .collect()
}
