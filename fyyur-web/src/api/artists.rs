//! Artist endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use fyyur_common::catalog::{self, ArtistPage, SearchResult};
use fyyur_common::db::artists;
use fyyur_common::models::{Artist, ArtistEntry, ArtistForm, ArtistId};
use fyyur_common::time;

use super::SearchForm;
use crate::{ApiError, ApiResult, AppState};

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> ApiResult<Json<Vec<ArtistEntry>>> {
    let directory = catalog::artist_directory(&state.store()).await?;
    Ok(Json(directory))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    payload: Result<Json<SearchForm>, JsonRejection>,
) -> ApiResult<Json<SearchResult>> {
    let Json(form) = payload?;
    let result = catalog::artist_search(&state.store(), &form.search_term, time::now()).await?;
    Ok(Json(result))
}

/// GET /artists/:id
pub async fn show_artist(
    State(state): State<AppState>,
    path: Result<Path<ArtistId>, PathRejection>,
) -> ApiResult<Json<ArtistPage>> {
    let Path(id) = path?;
    let page = catalog::artist_page(&state.store(), id, time::now()).await?;
    Ok(Json(page))
}

/// POST /artists/create
pub async fn create_artist(
    State(state): State<AppState>,
    payload: Result<Json<ArtistForm>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Artist>)> {
    let Json(form) = payload?;
    let fields = form.validate()?;
    let artist = artists::insert_artist(&state.db, &fields).await?;
    Ok((StatusCode::CREATED, Json(artist)))
}

/// GET /artists/:id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    path: Result<Path<ArtistId>, PathRejection>,
) -> ApiResult<Json<Artist>> {
    let Path(id) = path?;
    artists::load_artist(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("artist {}", id)))
}

/// POST /artists/:id/edit
pub async fn edit_artist(
    State(state): State<AppState>,
    path: Result<Path<ArtistId>, PathRejection>,
    payload: Result<Json<ArtistForm>, JsonRejection>,
) -> ApiResult<Json<Artist>> {
    let Path(id) = path?;
    let Json(form) = payload?;
    let fields = form.validate()?;
    let artist = artists::update_artist(&state.db, id, &fields).await?;
    Ok(Json(artist))
}

/// DELETE /artists/:id
pub async fn delete_artist(
    State(state): State<AppState>,
    path: Result<Path<ArtistId>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    artists::delete_artist(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/search", post(search_artists))
        .route("/artists/create", post(create_artist))
        .route("/artists/:id", get(show_artist).delete(delete_artist))
        .route("/artists/:id/edit", get(edit_artist_form).post(edit_artist))
}
