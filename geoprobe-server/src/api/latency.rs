//! Latency report handler

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use geoprobe_types::{ConsistencyMode, ProbeReport};

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LatencyParams {
    pub consistency: Option<String>,
}

/// `GET /latency-report?consistency=<mode>`
pub async fn get_latency_report(
    State(state): State<AppState>,
    Query(params): Query<LatencyParams>,
) -> Result<Json<ProbeReport>, (StatusCode, Json<Value>)> {
    let consistency = params
        .consistency
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<ConsistencyMode>)
        .transpose()
        .map_err(|e| {
            tracing::warn!("[API] latency-report rejected: {}", e);
            (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })))
        })?;

    match state.comparator().compare(consistency).await {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            tracing::error!("[API] latency-report failed: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": e.to_string() }))))
        },
    }
}
