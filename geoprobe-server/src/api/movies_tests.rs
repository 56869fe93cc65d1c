use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use std::sync::Arc;

use geoprobe_types::NewMovie;
use serde_json::json;

use super::movies::add_movie;
use crate::test_helpers::{healthy_factory, test_app_state, test_app_state_with, RecordingStore};

fn movie(value: serde_json::Value) -> Result<Json<NewMovie>, axum::extract::rejection::JsonRejection> {
    Ok(Json(serde_json::from_value(value).unwrap()))
}

#[tokio::test]
async fn test_add_movie_created() {
    let store = Arc::new(RecordingStore::default());
    let (state, _tmp) = test_app_state_with(healthy_factory(), store.clone());

    let (status, Json(doc)) = add_movie(
        State(state),
        movie(json!({
            "title": "The Matrix",
            "genres": ["Action", "Sci-Fi"],
            "year": 1999,
            "Rating": 8.7,
            "Rotton Tomato": "83%"
        })),
    )
    .await
    .unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(doc.id, "The-Matrix-1999");
    assert_eq!(doc.movie, "The-Matrix-1999");

    let writes = store.writes.lock().unwrap();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0]["Rotton Tomato"], "83%");
    assert_eq!(writes[0]["genres"], json!(["Action", "Sci-Fi"]));
}

#[tokio::test]
async fn test_add_movie_missing_fields() {
    let (state, _tmp) = test_app_state(healthy_factory(), RecordingStore::default());

    let (status, Json(body)) =
        add_movie(State(state), movie(json!({"title": "The Matrix"}))).await.unwrap_err();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "Missing required fields: title, genres, or year"}));
}

#[tokio::test]
async fn test_add_movie_store_failure() {
    let store = RecordingStore { fail_with: Some("socket hang up".into()), ..Default::default() };
    let (state, _tmp) = test_app_state(healthy_factory(), store);

    let (status, Json(body)) = add_movie(
        State(state),
        movie(json!({"title": "Heat", "genres": ["Crime"], "year": 1995})),
    )
    .await
    .unwrap_err();

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to add movie");
    assert_eq!(body["error"], "Connection failed: socket hang up");
}
