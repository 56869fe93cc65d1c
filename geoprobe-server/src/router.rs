use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::api;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config().server.static_dir.clone();

    let routes = Router::<AppState>::new()
        .merge(api::router())
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .route("/version", get(version_info));

    // Anything the API does not claim is a static asset; unknown paths get index.html.
    let index_path = format!("{}/index.html", static_dir);
    let static_service = ServeDir::new(&static_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(&index_path));

    routes
        .with_state(state)
        .fallback_service(static_service)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, axum::Json(serde_json::json!({"status": "ok"})))
}

async fn version_info() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({
            "version": option_env!("GIT_VERSION").unwrap_or("dev"),
            "build_time": option_env!("BUILD_TIME").unwrap_or("unknown"),
            "cargo_version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, reason = "test assertions")]
mod tests {
    use super::*;
    use axum_test::TestServer;

    use crate::api::movies::INVALID_PAYLOAD_MESSAGE;

    use crate::test_helpers::{healthy_factory, test_app_state, RecordingStore};

    fn server() -> (TestServer, tempfile::TempDir) {
        let (state, tmp) = test_app_state(healthy_factory(), RecordingStore::default());
        (TestServer::new(build_router(state)).unwrap(), tmp)
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let (server, _tmp) = server();

        let response = server.get("/health").await;
        response.assert_status_ok();
        let json: serde_json::Value = response.json();
        assert_eq!(json["status"], "ok");

        server.get("/healthz").await.assert_status_ok();

        let json: serde_json::Value = server.get("/version").await.json();
        assert_eq!(json["cargo_version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_latency_report_route() {
        let (server, _tmp) = server();

        let response = server.get("/latency-report").add_query_param("consistency", "eventual").await;
        response.assert_status_ok();
        let json: serde_json::Value = response.json();
        assert_eq!(json["consistency"], "Eventual");
        assert_eq!(json["centralIndia"]["success"], true);
        assert_eq!(json["westUS3"]["regionServed"], "West US 3");
        assert!(json["diagnostics"]["westUS3"]["endpoints"].is_array());
    }

    #[tokio::test]
    async fn test_latency_report_rejects_unknown_consistency() {
        let (server, _tmp) = server();

        let response =
            server.get("/latency-report").add_query_param("consistency", "linearizable").await;
        response.assert_status_bad_request();
        let json: serde_json::Value = response.json();
        assert!(json["error"].as_str().unwrap().contains("linearizable"));
    }

    #[tokio::test]
    async fn test_movies_route() {
        let (server, _tmp) = server();

        let response = server
            .post("/movies")
            .json(&serde_json::json!({"title": "Heat", "genres": ["Crime"], "year": 1995}))
            .await;
        response.assert_status(StatusCode::CREATED);
        let json: serde_json::Value = response.json();
        assert_eq!(json["id"], "Heat-1995");

        let response = server.post("/movies").json(&serde_json::json!({"year": 1995})).await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_malformed_movie_body_is_bad_request() {
        let (server, _tmp) = server();

        let response = server
            .post("/movies")
            .content_type("application/json")
            .bytes("{ not json".into())
            .await;
        response.assert_status_bad_request();
        let json: serde_json::Value = response.json();
        assert_eq!(json["message"], INVALID_PAYLOAD_MESSAGE);
    }

    #[tokio::test]
    async fn test_mistyped_movie_fields_are_not_reported_as_missing() {
        let (server, _tmp) = server();

        let response = server
            .post("/movies")
            .json(&serde_json::json!({"title": "Heat", "genres": "Crime", "year": "1995"}))
            .await;
        response.assert_status_bad_request();
        let json: serde_json::Value = response.json();
        assert_eq!(json["message"], INVALID_PAYLOAD_MESSAGE);
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_unknown_paths_serve_index() {
        let (server, tmp) = server();
        std::fs::write(tmp.path().join("index.html"), "<h1>geoprobe</h1>").unwrap();

        let response = server.get("/some/client/route").await;
        response.assert_status_ok();
        assert_eq!(response.text(), "<h1>geoprobe</h1>");
    }
}
