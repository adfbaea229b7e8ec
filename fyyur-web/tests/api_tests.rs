//! Integration tests for the fyyur-web pages
//!
//! Every test drives the full router with `oneshot` against its own
//! in-memory database loaded with the demo listings:
//! - venues 1 The Musical Hop, 2 The Dueling Pianos Bar,
//!   3 Park Square Live Music & Coffee
//! - artists 1 Guns N Petals, 2 Matt Quevado, 3 The Wild Sax Band
//! - two shows in 2019, three at venue 3 by artist 3 in 2035

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use fyyur_common::config::CliOverrides;
use fyyur_common::db::init_database;
use fyyur_common::Config;
use fyyur_web::db::seed::seed_demo_data;
use fyyur_web::{build_router, AppState};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::util::ServiceExt; // for `oneshot` method

const TEST_SECRET: &str = "integration-test-secret";

/// Test helper: seeded in-memory database and a router over it
async fn setup_app() -> (Router, SqlitePool) {
    let pool = init_database("sqlite::memory:")
        .await
        .expect("Should open in-memory database");
    assert!(seed_demo_data(&pool).await.expect("Should seed demo data"));

    let config = Config::resolve(
        CliOverrides {
            database_url: Some("sqlite::memory:".to_string()),
            secret_key: Some(TEST_SECRET.to_string()),
            ..Default::default()
        },
        None,
    );
    (build_router(AppState::new(pool.clone(), config)), pool)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Should read body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8")
}

/// Make every `op` (INSERT or UPDATE) on `table` fail inside the database
async fn fail_writes(pool: &SqlitePool, op: &str, table: &str) {
    sqlx::query(&format!(
        "CREATE TRIGGER fail_{op}_{table} BEFORE {op} ON {table} \
         BEGIN SELECT RAISE(ABORT, 'disk on fire'); END",
        op = op,
        table = table
    ))
    .execute(pool)
    .await
    .expect("Should install failing trigger");
}

async fn count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}

fn venue_fields<'a>(name: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("name", name),
        ("city", "Oakland"),
        ("state", "CA"),
        ("address", "12 Broadway"),
        ("phone", "510-555-0199"),
        ("genres", "Jazz"),
        ("genres", "Blues"),
        ("facebook_link", ""),
        ("website_link", "https://jazzcellar.example.com"),
        ("seeking_talent", "y"),
        ("seeking_description", "Trios welcome"),
    ]
}

// =============================================================================
// Health and home
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _pool) = setup_app().await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "fyyur-web");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_home_lists_recent_records() {
    let (app, _pool) = setup_app().await;

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("The Wild Sax Band"));
}

#[tokio::test]
async fn test_unknown_route_is_404_page() {
    let (app, _pool) = setup_app().await;

    let response = app.oneshot(get("/no/such/page")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("<h1>404</h1>"));
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_venue_search_hop_matches_one() {
    let (app, _pool) = setup_app().await;

    let response = app
        .oneshot(post_form("/venues/search", &[("search_term", "Hop")]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains(r#"Number of search results for "Hop": 1"#));
    assert!(body.contains(r#"<a href="/venues/1">The Musical Hop</a>"#));
    assert!(!body.contains("Park Square"));
}

#[tokio::test]
async fn test_venue_search_music_matches_two() {
    let (app, _pool) = setup_app().await;

    let response = app
        .oneshot(post_form("/venues/search", &[("search_term", "Music")]))
        .await
        .unwrap();
    let body = body_text(response).await;

    assert!(body.contains(r#"Number of search results for "Music": 2"#));
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("Park Square Live Music &amp; Coffee</a> <small>3 upcoming</small>"));
    assert!(!body.contains("Dueling Pianos"));
}

#[tokio::test]
async fn test_artist_search_is_case_insensitive() {
    let (app, _pool) = setup_app().await;

    let response = app
        .clone()
        .oneshot(post_form("/artists/search", &[("search_term", "A")]))
        .await
        .unwrap();
    let body = body_text(response).await;
    assert!(body.contains(r#"Number of search results for "A": 3"#));
    for name in ["Guns N Petals", "Matt Quevado", "The Wild Sax Band"] {
        assert!(body.contains(name), "{} should match", name);
    }

    let response = app
        .oneshot(post_form("/artists/search", &[("search_term", "band")]))
        .await
        .unwrap();
    let body = body_text(response).await;
    assert!(body.contains(r#"Number of search results for "band": 1"#));
    assert!(body.contains("The Wild Sax Band"));
    assert!(!body.contains("Guns N Petals"));
}

// =============================================================================
// Venues
// =============================================================================

#[tokio::test]
async fn test_venues_grouped_by_area() {
    let (app, _pool) = setup_app().await;

    let response = app.oneshot(get("/venues")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    let sf = body.find("<h3>San Francisco, CA</h3>").expect("San Francisco area");
    let ny = body.find("<h3>New York, NY</h3>").expect("New York area");
    assert!(sf < ny, "areas follow their first listed venue");
    assert_eq!(body.matches("<h3>San Francisco, CA</h3>").count(), 1);
}

#[tokio::test]
async fn test_venue_detail_partitions_shows() {
    let (app, _pool) = setup_app().await;

    let response = app.oneshot(get("/venues/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("<h1>Park Square Live Music &amp; Coffee</h1>"));
    assert!(body.contains("3 Upcoming Shows"));
    assert!(body.contains("1 Past Show"));
    assert!(body.contains("Sun 04, 01, 2035 8:00PM"));
}

#[tokio::test]
async fn test_missing_venue_is_404() {
    let (app, _pool) = setup_app().await;

    for uri in ["/venues/999", "/venues/abc", "/venues/999/edit"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
    }
}

#[tokio::test]
async fn test_create_venue_missing_name_rerenders_form() {
    let (app, pool) = setup_app().await;

    let fields: Vec<_> = venue_fields("ignored")
        .into_iter()
        .filter(|(k, _)| *k != "name")
        .collect();
    let response = app
        .oneshot(post_form("/venues/create", &fields))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_text(response).await;
    assert!(body.contains("Please fix the following errors: name: This field is required."));
    assert!(body.contains(r#"value="12 Broadway""#), "user input is kept");
    assert_eq!(count(&pool, "venues").await, 3);
}

#[tokio::test]
async fn test_create_venue_with_malformed_links_rejected() {
    let (app, pool) = setup_app().await;

    let fields: Vec<_> = venue_fields("The Jazz Cellar")
        .into_iter()
        .filter(|(k, _)| *k != "website_link" && *k != "facebook_link")
        .chain([("website_link", "https://.."), ("facebook_link", "http://a.b:notaport/x")])
        .collect();
    let response = app
        .oneshot(post_form("/venues/create", &fields))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_text(response).await;
    assert!(body.contains("website_link: Invalid URL."));
    assert!(body.contains("facebook_link: Invalid URL."));
    assert_eq!(count(&pool, "venues").await, 3);
}

#[tokio::test]
async fn test_form_post_without_content_type_renders_error_page() {
    let (app, pool) = setup_app().await;

    for uri in ["/venues/create", "/venues/search"] {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::from("name=The+Jazz+Cellar&search_term=Hop"))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        assert!(body_text(response).await.contains("<h1>500</h1>"), "{}", uri);
    }
    assert_eq!(count(&pool, "venues").await, 3);
}

#[tokio::test]
async fn test_create_venue_storage_failure_flashes_error() {
    let (app, pool) = setup_app().await;
    fail_writes(&pool, "INSERT", "venues").await;

    let response = app
        .clone()
        .oneshot(post_form("/venues/create", &venue_fields("The Jazz Cellar")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("An error occurred. Venue The Jazz Cellar could not be listed."));
    assert!(!body.contains("successfully listed"));
    assert_eq!(count(&pool, "venues").await, 3);

    // the failed write leaves the pool usable
    let response = app.oneshot(get("/venues")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("The Musical Hop"));
}

#[tokio::test]
async fn test_create_venue_lists_it() {
    let (app, pool) = setup_app().await;

    let response = app
        .clone()
        .oneshot(post_form("/venues/create", &venue_fields("The Jazz Cellar")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Venue The Jazz Cellar was successfully listed!"));
    assert_eq!(count(&pool, "venues").await, 4);

    let response = app.oneshot(get("/venues/4")).await.unwrap();
    let body = body_text(response).await;
    assert!(body.contains("<h1>The Jazz Cellar</h1>"));
    assert!(body.contains("<span>Blues</span>"));
}

#[tokio::test]
async fn test_edit_venue_redirects_with_flash() {
    let (app, _pool) = setup_app().await;

    let response = app.clone().oneshot(get("/venues/1/edit")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(r#"value="The Musical Hop""#));

    let response = app
        .clone()
        .oneshot(post_form("/venues/1/edit", &venue_fields("The Musical Hop Revue")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/venues/1");

    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
    let cookie = set_cookie.split(';').next().unwrap().to_string();
    assert!(cookie.starts_with("fyyur_flash="));

    let request = Request::builder()
        .uri("/venues/1")
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cleared = response.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
    assert!(cleared.contains("Max-Age=0"), "flash is shown once");

    let body = body_text(response).await;
    assert!(body.contains("Venue The Musical Hop Revue was successfully updated!"));
    assert!(body.contains("<h1>The Musical Hop Revue</h1>"));
    assert!(body.contains("Oakland"));
}

#[tokio::test]
async fn test_tampered_flash_cookie_ignored() {
    let (app, _pool) = setup_app().await;

    let request = Request::builder()
        .uri("/")
        .header(header::COOKIE, "fyyur_flash=W3sibGV2ZWwiOiJlcnJvciJ9XQ.deadbeef")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(!body_text(response).await.contains(r#"role="alert""#));
}

#[tokio::test]
async fn test_delete_venue_cascades_to_shows() {
    let (app, pool) = setup_app().await;

    let response = app.oneshot(delete("/venues/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Venue Park Square Live Music &amp; Coffee was successfully deleted."));
    assert_eq!(count(&pool, "venues").await, 2);
    assert_eq!(count(&pool, "shows").await, 1);
}

#[tokio::test]
async fn test_delete_unknown_venue_is_server_error() {
    let (app, pool) = setup_app().await;

    let response = app.clone().oneshot(delete("/venues/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.contains("<h1>500</h1>"));
    assert_eq!(count(&pool, "venues").await, 3);

    // still serving
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Artists
// =============================================================================

#[tokio::test]
async fn test_artist_listing_and_detail() {
    let (app, _pool) = setup_app().await;

    let response = app.clone().oneshot(get("/artists")).await.unwrap();
    let body = body_text(response).await;
    assert!(body.contains(r#"<a href="/artists/2">Matt Quevado</a>"#));

    let response = app.oneshot(get("/artists/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("3 Upcoming Shows"));
    assert!(body.contains("0 Past Shows"));
    assert!(body.contains(r#"href="/venues/3""#));
}

#[tokio::test]
async fn test_create_artist_without_genres_rejected() {
    let (app, pool) = setup_app().await;

    let response = app
        .oneshot(post_form(
            "/artists/create",
            &[("name", "Solo Act"), ("city", "Austin"), ("state", "TX")],
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response).await.contains("genres: This field is required."));
    assert_eq!(count(&pool, "artists").await, 3);
}

#[tokio::test]
async fn test_create_artist_storage_failure_flashes_error() {
    let (app, pool) = setup_app().await;
    fail_writes(&pool, "INSERT", "artists").await;

    let response = app
        .clone()
        .oneshot(post_form(
            "/artists/create",
            &[("name", "Solo Act"), ("city", "Austin"), ("state", "TX"), ("genres", "Folk")],
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response)
        .await
        .contains("An error occurred. Artist Solo Act could not be listed."));
    assert_eq!(count(&pool, "artists").await, 3);

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_update_artist_storage_failure_keeps_record() {
    let (app, pool) = setup_app().await;
    fail_writes(&pool, "UPDATE", "artists").await;

    let response = app
        .clone()
        .oneshot(post_form(
            "/artists/1/edit",
            &[("name", "Guns N Roses"), ("city", "Austin"), ("state", "TX"), ("genres", "Rock n Roll")],
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/artists/1");
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
    let cookie = set_cookie.split(';').next().unwrap().to_string();

    let request = Request::builder()
        .uri("/artists/1")
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("An error occurred. Artist Guns N Roses could not be updated."));
    assert!(body.contains("<h1>Guns N Petals</h1>"));

    let name: String = sqlx::query_scalar("SELECT name FROM artists WHERE id = 1")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(name, "Guns N Petals");
}

#[tokio::test]
async fn test_update_missing_artist_is_404() {
    let (app, _pool) = setup_app().await;

    let response = app
        .oneshot(post_form(
            "/artists/42/edit",
            &[("name", "Nobody"), ("city", "Austin"), ("state", "TX"), ("genres", "Jazz")],
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Shows
// =============================================================================

#[tokio::test]
async fn test_show_listing_uses_full_dates() {
    let (app, _pool) = setup_app().await;

    let response = app.oneshot(get("/shows")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Sunday April, 1, 2035 at 8:00PM"));
    assert!(body.contains("Guns N Petals"));
}

#[tokio::test]
async fn test_create_show() {
    let (app, pool) = setup_app().await;

    let response = app
        .clone()
        .oneshot(post_form(
            "/shows/create",
            &[("artist_id", "1"), ("venue_id", "2"), ("start_time", "2036-01-01 20:00")],
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Show was successfully listed!"));
    assert_eq!(count(&pool, "shows").await, 6);

    let response = app.oneshot(get("/venues/2")).await.unwrap();
    assert!(body_text(response).await.contains("1 Upcoming Show"));
}

#[tokio::test]
async fn test_create_show_for_unknown_venue_rejected() {
    let (app, pool) = setup_app().await;

    let response = app
        .oneshot(post_form(
            "/shows/create",
            &[("artist_id", "1"), ("venue_id", "99"), ("start_time", "2036-01-01 20:00")],
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response).await.contains("No venue with id 99."));
    assert_eq!(count(&pool, "shows").await, 5);
}

#[tokio::test]
async fn test_create_show_storage_failure_flashes_error() {
    let (app, pool) = setup_app().await;
    fail_writes(&pool, "INSERT", "shows").await;

    let response = app
        .clone()
        .oneshot(post_form(
            "/shows/create",
            &[("artist_id", "1"), ("venue_id", "2"), ("start_time", "2036-01-01 20:00")],
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response)
        .await
        .contains("An error occurred. Show could not be listed."));
    assert_eq!(count(&pool, "shows").await, 5);

    let response = app.oneshot(get("/shows")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
