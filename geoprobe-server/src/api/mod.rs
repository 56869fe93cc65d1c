//! API Routes

pub mod latency;
pub mod movies;

#[cfg(test)]
mod movies_tests;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/latency-report", get(latency::get_latency_report))
        .route("/movies", post(movies::add_movie))
}
