//! Search request body shared by venue and artist search

use serde::Deserialize;

/// `{ "search_term": "..." }`; a missing term searches for everything
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}
