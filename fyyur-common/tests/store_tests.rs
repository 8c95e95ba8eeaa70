//! SqliteStore against a real database file
//!
//! Seeds the three-venue, three-artist fixture and checks the joined reads,
//! show windows, search and the catalog views built on top of them.

use chrono::{DateTime, TimeZone, Utc};
use fyyur_common::catalog;
use fyyur_common::db::{artists, init_database, shows, venues};
use fyyur_common::models::{ArtistForm, NewShow, VenueForm};
use fyyur_common::{Error, ShowStore, ShowWindow, SqliteStore};
use tempfile::TempDir;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

fn now() -> DateTime<Utc> {
    at(2024, 1, 1, 0, 0)
}

fn venue_form(name: &str, city: &str, state: &str) -> VenueForm {
    VenueForm {
        name: name.to_string(),
        genres: vec!["Jazz".to_string(), "Folk".to_string()],
        city: city.to_string(),
        state: state.to_string(),
        ..Default::default()
    }
}

fn artist_form(name: &str) -> ArtistForm {
    ArtistForm {
        name: name.to_string(),
        genres: vec!["Rock n Roll".to_string()],
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        image_link: Some(format!("https://img.example/{}", name.replace(' ', "-"))),
        ..Default::default()
    }
}

/// Returns the store plus the temp dir keeping the database alive
async fn seeded_store() -> (SqliteStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let pool = init_database(&temp_dir.path().join("fyyur.db")).await.unwrap();

    for (name, city, state) in [
        ("The Musical Hop", "San Francisco", "CA"),
        ("The Dueling Pianos Bar", "New York", "NY"),
        ("Park Square Live Music & Coffee", "San Francisco", "CA"),
    ] {
        venues::insert_venue(&pool, &venue_form(name, city, state).validate().unwrap())
            .await
            .unwrap();
    }

    for name in ["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"] {
        artists::insert_artist(&pool, &artist_form(name).validate().unwrap())
            .await
            .unwrap();
    }

    for (venue_id, artist_id, start_time) in [
        (1, 1, at(2019, 5, 21, 21, 30)),
        (3, 2, at(2019, 6, 15, 23, 0)),
        (3, 3, at(2035, 4, 15, 20, 0)),
        (3, 3, at(2035, 4, 1, 20, 0)),
        (3, 3, at(2035, 4, 8, 20, 0)),
    ] {
        shows::insert_show(
            &pool,
            &NewShow {
                venue_id,
                artist_id,
                start_time,
            },
        )
        .await
        .unwrap();
    }

    (SqliteStore::new(pool), temp_dir)
}

#[tokio::test]
async fn test_venue_round_trip_keeps_genres() {
    let (store, _dir) = seeded_store().await;

    let venue = store.fetch_venue(1).await.unwrap().unwrap();
    assert_eq!(venue.name, "The Musical Hop");
    assert_eq!(venue.genres, vec!["Jazz", "Folk"]);
    assert!(venue.address.is_none());

    assert!(store.fetch_venue(42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_shows_for_venue_sorted_and_windowed() {
    let (store, _dir) = seeded_store().await;

    let all = store.fetch_shows_for_venue(3, ShowWindow::all()).await.unwrap();
    let times: Vec<_> = all.iter().map(|s| s.start_time).collect();
    assert_eq!(
        times,
        vec![
            at(2019, 6, 15, 23, 0),
            at(2035, 4, 1, 20, 0),
            at(2035, 4, 8, 20, 0),
            at(2035, 4, 15, 20, 0),
        ]
    );
    assert_eq!(all[0].artist_name, "Matt Quevedo");

    let upcoming = store
        .fetch_shows_for_venue(3, ShowWindow::upcoming(now()))
        .await
        .unwrap();
    assert_eq!(upcoming.len(), 3);

    let past = store
        .fetch_shows_for_venue(3, ShowWindow::past(now()))
        .await
        .unwrap();
    assert_eq!(past.len(), 1);
}

#[tokio::test]
async fn test_show_starting_exactly_now_is_past() {
    let (store, _dir) = seeded_store().await;
    let boundary = at(2019, 5, 21, 21, 30);

    let upcoming = store
        .fetch_shows_for_artist(1, ShowWindow::upcoming(boundary))
        .await
        .unwrap();
    let past = store
        .fetch_shows_for_artist(1, ShowWindow::past(boundary))
        .await
        .unwrap();

    assert!(upcoming.is_empty());
    assert_eq!(past.len(), 1);
    assert_eq!(past[0].venue_name, "The Musical Hop");
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let (store, _dir) = seeded_store().await;

    let venues = store.search_venues("hop").await.unwrap();
    assert_eq!(venues.len(), 1);
    assert_eq!(venues[0].name, "The Musical Hop");

    let venues = store.search_venues("Music").await.unwrap();
    assert_eq!(venues.len(), 2);

    let artists = store.search_artists("A").await.unwrap();
    assert_eq!(artists.len(), 3);

    let artists = store.search_artists("band").await.unwrap();
    assert_eq!(artists.len(), 1);
    assert_eq!(artists[0].name, "The Wild Sax Band");
}

#[tokio::test]
async fn test_search_wildcards_match_literally() {
    let (store, _dir) = seeded_store().await;

    assert!(store.search_venues("%").await.unwrap().is_empty());
    assert!(store.search_artists("_").await.unwrap().is_empty());

    let venues = store.search_venues("& Coffee").await.unwrap();
    assert_eq!(venues.len(), 1);
}

#[tokio::test]
async fn test_insert_show_rejects_unknown_references() {
    let (store, _dir) = seeded_store().await;

    let result = shows::insert_show(
        store.pool(),
        &NewShow {
            venue_id: 99,
            artist_id: 1,
            start_time: now(),
        },
    )
    .await;
    assert!(matches!(result, Err(Error::InvalidShowReference { show_id: None, .. })));

    let result = shows::insert_show(
        store.pool(),
        &NewShow {
            venue_id: 1,
            artist_id: 99,
            start_time: now(),
        },
    )
    .await;
    assert!(matches!(result, Err(Error::InvalidShowReference { .. })));
}

#[tokio::test]
async fn test_update_and_delete_missing_venue_are_not_found() {
    let (store, _dir) = seeded_store().await;
    let fields = venue_form("Nowhere", "Austin", "TX").validate().unwrap();

    let result = venues::update_venue(store.pool(), 42, &fields).await;
    assert!(matches!(result, Err(Error::NotFound(_))));

    let result = venues::delete_venue(store.pool(), 42).await;
    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[tokio::test]
async fn test_delete_artist_removes_their_shows() {
    let (store, _dir) = seeded_store().await;

    artists::delete_artist(store.pool(), 3).await.unwrap();

    let shows = store.fetch_all_shows().await.unwrap();
    assert_eq!(shows.len(), 2);
    assert!(shows.iter().all(|s| s.artist_id != 3));
}

#[tokio::test]
async fn test_catalog_views_over_sqlite() {
    let (store, _dir) = seeded_store().await;

    let areas = catalog::venue_areas(&store, now()).await.unwrap();
    let labels: Vec<_> = areas.iter().map(|a| (a.city.as_str(), a.venues.len())).collect();
    assert_eq!(labels, vec![("San Francisco", 1), ("New York", 1), ("San Francisco", 1)]);
    assert_eq!(areas[2].venues[0].num_upcoming_shows, 3);

    let page = catalog::venue_page(&store, 3, now()).await.unwrap();
    assert_eq!(page.shows.past_shows_count, 1);
    assert_eq!(page.shows.upcoming_shows_count, 3);

    let page = catalog::artist_page(&store, 3, now()).await.unwrap();
    assert_eq!(page.shows.upcoming_shows[0].start_time, at(2035, 4, 1, 20, 0));

    let result = catalog::venue_search(&store, "music", now()).await.unwrap();
    assert_eq!(result.count, 2);

    let board = catalog::show_board(&store).await.unwrap();
    assert_eq!(board.len(), 5);
    assert_eq!(board[0].start_time, at(2019, 5, 21, 21, 30));
}
