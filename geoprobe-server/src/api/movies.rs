//! Movie creation handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};

use geoprobe_core::AppError;
use geoprobe_types::{MovieDocument, NewMovie};

use crate::state::AppState;

type ApiError = (StatusCode, Json<Value>);

/// Body was not JSON, or a field had the wrong type.
pub const INVALID_PAYLOAD_MESSAGE: &str =
    "Invalid movie payload: title must be a string, genres a list of strings, year an integer";

/// `POST /movies`
pub async fn add_movie(
    State(state): State<AppState>,
    payload: Result<Json<NewMovie>, JsonRejection>,
) -> Result<(StatusCode, Json<MovieDocument>), ApiError> {
    let Json(movie) = payload.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": INVALID_PAYLOAD_MESSAGE, "error": rejection.body_text() })),
        )
    })?;

    match state.catalog().add(movie).await {
        Ok(document) => Ok((StatusCode::CREATED, Json(document))),
        Err(AppError::Validation(message)) => {
            Err((StatusCode::BAD_REQUEST, Json(json!({ "message": message }))))
        },
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Failed to add movie", "error": e.to_string() })),
        )),
    }
}
