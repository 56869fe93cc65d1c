#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::unwrap_used, clippy::indexing_slicing, reason = "integration test assertions")]

use std::sync::Arc;

use geoprobe_core::{CosmosClientFactory, LatencyComparator};
use geoprobe_types::{ConsistencyMode, CosmosConfig, ProbeConfig, ServingRegion};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DOCS: &str = "dbs/MovieDB/colls/Movies/docs";

async fn account(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "readableLocations": [
                {"name": "Central India", "databaseAccountEndpoint": format!("{}/acct-centralindia/", server.uri())},
                {"name": "West US 3", "databaseAccountEndpoint": format!("{}/acct-westus3/", server.uri())}
            ],
            "writableLocations": [
                {"name": "Central India", "databaseAccountEndpoint": server.uri()}
            ]
        })))
        .expect(2)
        .mount(server)
        .await;
}

fn factory(server: &MockServer) -> Arc<CosmosClientFactory> {
    Arc::new(CosmosClientFactory::from_settings(&CosmosConfig {
        endpoint: server.uri(),
        key: "dGVzdC1rZXk=".into(),
        ..CosmosConfig::default()
    }))
}

#[tokio::test]
async fn test_report_against_live_http_backend() {
    let server = MockServer::start().await;
    account(&server).await;

    Mock::given(method("POST"))
        .and(path(format!("/acct-westus3/{DOCS}")))
        .and(header("x-ms-consistency-level", "Eventual"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-ms-serviceendpoint", "https://movies-westus3.documents.azure.com/")
                .set_body_json(json!({"Documents": [{"id": "Heat-1995", "title": "Heat"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/acct-centralindia/{DOCS}")))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "code": "ServiceUnavailable",
            "message": "Region is offline"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let comparator = LatencyComparator::from_config(factory(&server), &ProbeConfig::default()).unwrap();
    let report = comparator.compare(Some(ConsistencyMode::Eventual)).await.unwrap();

    let west = report.region("westUS3").unwrap();
    assert!(west.success);
    assert_eq!(west.region_served, ServingRegion::Region("West US 3".into()));
    assert_eq!(west.endpoint.as_deref(), Some("https://movies-westus3.documents.azure.com/"));
    assert_eq!(west.data.as_ref().unwrap()[0]["id"], "Heat-1995");

    let west_diag = report.diagnostic("westUS3").unwrap();
    assert_eq!(
        west_diag.endpoints,
        vec![server.uri(), format!("{}/acct-westus3/", server.uri())]
    );

    let central = report.region("centralIndia").unwrap();
    assert!(!central.success);
    assert!(central.error.as_deref().unwrap().contains("Region is offline"));
    assert_eq!(central.region_served, ServingRegion::Unavailable);

    let central_diag = report.diagnostic("centralIndia").unwrap();
    assert_eq!(central_diag.actual_endpoint, "Error");
    assert!(central_diag.endpoints.is_empty());

    let body = serde_json::to_value(&report).unwrap();
    assert_eq!(body["consistency"], "Eventual");
    assert_eq!(body["diagnostics"]["westUS3"]["regionServed"], "West US 3");
}
