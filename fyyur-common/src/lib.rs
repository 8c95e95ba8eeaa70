//! # Fyyur Common Library
//!
//! Shared code for the Fyyur venue/artist booking service:
//! - Domain models (venues, artists, shows) and form validation
//! - Show partitioning (past vs upcoming) and venue grouping by area
//! - Storage collaborator trait and its SQLite implementation
//! - Catalog views composed from the above
//! - Configuration loading
//! - Database initialization and migrations

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod grouping;
pub mod models;
pub mod partition;
pub mod store;
pub mod time;

pub use error::{Error, Result};
pub use grouping::{group_by_area, VenueArea, VenueSummary};
pub use partition::{partition, Scheduled, ShowPartition};
pub use store::{ShowStore, ShowWindow, SqliteStore};
