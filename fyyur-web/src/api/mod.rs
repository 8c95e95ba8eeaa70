//! HTTP API handlers for fyyur-web

pub mod artists;
pub mod health;
pub mod search;
pub mod shows;
pub mod venues;

pub use artists::artist_routes;
pub use health::health_routes;
pub use search::SearchForm;
pub use shows::show_routes;
pub use venues::venue_routes;
