//! Venue endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use fyyur_common::catalog::{self, SearchResult, VenuePage};
use fyyur_common::db::venues;
use fyyur_common::models::{Venue, VenueForm, VenueId};
use fyyur_common::{time, VenueArea};

use super::SearchForm;
use crate::{ApiError, ApiResult, AppState};

/// GET /venues
///
/// Venues grouped by (city, state) with upcoming show counts.
pub async fn list_venues(State(state): State<AppState>) -> ApiResult<Json<Vec<VenueArea>>> {
    let areas = catalog::venue_areas(&state.store(), time::now()).await?;
    Ok(Json(areas))
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    payload: Result<Json<SearchForm>, JsonRejection>,
) -> ApiResult<Json<SearchResult>> {
    let Json(form) = payload?;
    let result = catalog::venue_search(&state.store(), &form.search_term, time::now()).await?;
    Ok(Json(result))
}

/// GET /venues/:id
pub async fn show_venue(
    State(state): State<AppState>,
    path: Result<Path<VenueId>, PathRejection>,
) -> ApiResult<Json<VenuePage>> {
    let Path(id) = path?;
    let page = catalog::venue_page(&state.store(), id, time::now()).await?;
    Ok(Json(page))
}

/// POST /venues/create
pub async fn create_venue(
    State(state): State<AppState>,
    payload: Result<Json<VenueForm>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Venue>)> {
    let Json(form) = payload?;
    let fields = form.validate()?;
    let venue = venues::insert_venue(&state.db, &fields).await?;
    Ok((StatusCode::CREATED, Json(venue)))
}

/// GET /venues/:id/edit
///
/// Current record, for prefilling the edit form.
pub async fn edit_venue_form(
    State(state): State<AppState>,
    path: Result<Path<VenueId>, PathRejection>,
) -> ApiResult<Json<Venue>> {
    let Path(id) = path?;
    venues::load_venue(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("venue {}", id)))
}

/// POST /venues/:id/edit
pub async fn edit_venue(
    State(state): State<AppState>,
    path: Result<Path<VenueId>, PathRejection>,
    payload: Result<Json<VenueForm>, JsonRejection>,
) -> ApiResult<Json<Venue>> {
    let Path(id) = path?;
    let Json(form) = payload?;
    let fields = form.validate()?;
    let venue = venues::update_venue(&state.db, id, &fields).await?;
    Ok(Json(venue))
}

/// DELETE /venues/:id
pub async fn delete_venue(
    State(state): State<AppState>,
    path: Result<Path<VenueId>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    venues::delete_venue(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Build venue routes
pub fn venue_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", post(search_venues))
        .route("/venues/create", post(create_venue))
        .route("/venues/:id", get(show_venue).delete(delete_venue))
        .route("/venues/:id/edit", get(edit_venue_form).post(edit_venue))
}
