//! Database schema, migrations and table access

pub mod artists;
pub mod init;
pub mod migrations;
pub mod shows;
pub mod venues;

pub use init::*;
pub use migrations::run_migrations;

/// Escape `%`, `_` and `\` so a search term matches literally inside `LIKE ... ESCAPE '\'`
pub(crate) fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.trim().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

pub(crate) fn encode_genres(genres: &[String]) -> crate::Result<String> {
    Ok(serde_json::to_string(genres)?)
}

pub(crate) fn decode_genres(raw: &str) -> crate::Result<Vec<String>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(raw)?)
}
