//! Show endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use fyyur_common::catalog;
use fyyur_common::db::shows;
use fyyur_common::models::{Show, ShowForm, ShowListing};

use crate::{ApiResult, AppState};

/// GET /shows
pub async fn list_shows(State(state): State<AppState>) -> ApiResult<Json<Vec<ShowListing>>> {
    let board = catalog::show_board(&state.store()).await?;
    Ok(Json(board))
}

/// POST /shows/create
///
/// Unknown venue or artist ids are rejected with 422 INVALID_SHOW_REFERENCE.
pub async fn create_show(
    State(state): State<AppState>,
    payload: Result<Json<ShowForm>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Show>)> {
    let Json(form) = payload?;
    let new_show = form.validate()?;
    let show = shows::insert_show(&state.db, &new_show).await?;
    Ok((StatusCode::CREATED, Json(show)))
}

pub fn show_routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(list_shows))
        .route("/shows/create", post(create_show))
}
