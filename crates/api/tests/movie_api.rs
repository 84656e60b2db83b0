//! HTTP-level integration tests for the `/movies` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Create + fetch round trip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_movie_returns_201_with_record(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/movies/",
        serde_json::json!({
            "title": "Stalker",
            "description": "Three men cross the Zone",
            "trailer": "https://example.com/stalker",
            "year": 1979,
            "rating": 8.1
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Stalker");
    assert_eq!(json["year"], 1979);
    assert_eq!(json["rating"], 8.1);
    assert!(json["id"].is_number());
    assert!(json["director_id"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn created_movie_round_trips_through_get(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/movies/",
            serde_json::json!({
                "title": "Solaris",
                "description": "A psychologist visits a space station",
                "year": 1972,
                "rating": 8.0
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "Solaris");
    assert_eq!(json["description"], "A psychologist visits a space station");
    assert_eq!(json["year"], 1972);
    assert_eq!(json["rating"], 8.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_movie_honours_caller_supplied_id(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/movies/",
        serde_json::json!({"id": 42, "title": "Mirror"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["id"], 42);

    let app = common::build_test_app(pool);
    let response = get(app, "/movies/42").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_nonexistent_movie_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/movies/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Listing and filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_movies_returns_all(pool: SqlitePool) {
    for title in ["Alien", "Aliens"] {
        let app = common::build_test_app(pool.clone());
        post_json(app, "/movies/", serde_json::json!({"title": title})).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/movies/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn filter_by_director_returns_exactly_matching_movies(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let director = body_json(
        post_json(app, "/directors/", serde_json::json!({"name": "Ridley Scott"})).await,
    )
    .await;
    let director_id = director["id"].as_i64().unwrap();

    for title in ["Alien", "Blade Runner"] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/movies/",
            serde_json::json!({"title": title, "director_id": director_id}),
        )
        .await;
    }
    // One movie by nobody in particular.
    let app = common::build_test_app(pool.clone());
    post_json(app, "/movies/", serde_json::json!({"title": "Cube"})).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/movies/?director_id={director_id}")).await).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    for movie in arr {
        assert_eq!(movie["director_id"], director_id);
    }

    // A director id with no matches yields an empty list, not an error.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/movies/?director_id=999999").await).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn filter_by_genre_returns_exactly_matching_movies(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let genre =
        body_json(post_json(app, "/genres/", serde_json::json!({"name": "Horror"})).await).await;
    let genre_id = genre["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/movies/",
        serde_json::json!({"title": "The Thing", "genre_id": genre_id}),
    )
    .await;
    let app = common::build_test_app(pool.clone());
    post_json(app, "/movies/", serde_json::json!({"title": "Heat"})).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/movies/?genre_id={genre_id}")).await).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["title"], "The Thing");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn director_filter_wins_when_both_filters_supplied(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let director = body_json(
        post_json(app, "/directors/", serde_json::json!({"name": "John Carpenter"})).await,
    )
    .await;
    let director_id = director["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let genre =
        body_json(post_json(app, "/genres/", serde_json::json!({"name": "Horror"})).await).await;
    let genre_id = genre["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/movies/",
        serde_json::json!({"title": "The Thing", "director_id": director_id}),
    )
    .await;
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/movies/",
        serde_json::json!({"title": "Suspiria", "genre_id": genre_id}),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(
        get(
            app,
            &format!("/movies/?director_id={director_id}&genre_id={genre_id}"),
        )
        .await,
    )
    .await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["title"], "The Thing");
}

// ---------------------------------------------------------------------------
// Replace
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn put_replaces_all_fields(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/movies/",
            serde_json::json!({"title": "Original", "year": 1990, "rating": 5.0}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/movies/{id}"),
        serde_json::json!({"title": "Replaced", "year": 1991}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "Replaced");
    assert_eq!(json["year"], 1991);
    // Absent fields are replaced with null, not left as before.
    assert!(json["rating"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn put_nonexistent_movie_returns_404_and_creates_nothing(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = put_json(app, "/movies/5", serde_json::json!({"title": "Ghost"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/movies/").await).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn put_with_mismatched_body_id_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/movies/", serde_json::json!({"title": "Fixed Id"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/movies/{id}"),
        serde_json::json!({"id": id + 1, "title": "Moved"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_movie_returns_204_then_get_404s(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/movies/", serde_json::json!({"title": "Doomed"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_nonexistent_movie_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/movies/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
