use chrono::Utc;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::OnceCell;
use url::Url;

use geoprobe_types::Query;

use crate::auth::{authorization_token, decode_key, http_date};
use crate::error::ClientError;
use crate::types::{ClientConfig, DatabaseAccount, QueryPage, QueryResponse, ServiceErrorBody};

const API_VERSION: &str = "2018-12-31";

pub struct CosmosClient {
    client: Client,
    config: ClientConfig,
    key: Vec<u8>,
    read_endpoint: OnceCell<String>,
}

impl CosmosClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let key = decode_key(&config.key)?;
        let user_agent =
            format!("geoprobe/{} {}", env!("CARGO_PKG_VERSION"), config.user_agent_suffix);

        let mut builder = Client::builder().user_agent(user_agent).tcp_nodelay(true);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self { client, config, key, read_endpoint: OnceCell::new() })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Runs `query` against the preferred read region and materializes every page.
    pub async fn run_query(&self, query: &Query) -> Result<QueryResponse, ClientError> {
        let started = Utc::now();
        let mut contacted = Vec::new();

        let endpoint = self.resolve_read_endpoint(&mut contacted).await?.to_string();
        let link = self.collection_link();
        let url = join_endpoint(&endpoint, &format!("{link}/docs"))?;
        let body = serde_json::to_vec(query)?;

        let mut resources = Vec::new();
        let mut first_headers: Option<HashMap<String, String>> = None;
        let mut continuation: Option<String> = None;
        let mut pages: u32 = 0;

        loop {
            record_contact(&mut contacted, &endpoint);

            let mut request = self
                .signed(Method::POST, url.clone(), "docs", &link)?
                .header("x-ms-documentdb-isquery", "True")
                .header("x-ms-documentdb-query-enablecrosspartition", "True")
                .header("x-ms-documentdb-populatequerymetrics", "True")
                .header("x-ms-consistency-level", self.config.consistency.as_str())
                .header(CONTENT_TYPE, "application/query+json")
                .body(body.clone());
            if let Some(token) = &continuation {
                request = request.header("x-ms-continuation", token.as_str());
            }

            let response = request.send().await.map_err(ClientError::from_transport)?;
            let headers = lowercase_headers(response.headers());
            let response = ensure_success(response).await?;
            let page: QueryPage =
                response.json().await.map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

            pages += 1;
            resources.extend(page.documents);
            continuation =
                headers.get("x-ms-continuation").filter(|t| !t.is_empty()).cloned();
            first_headers.get_or_insert(headers);

            if continuation.is_none() {
                break;
            }
            tracing::trace!("query page {} returned a continuation, fetching next", pages);
        }

        let diagnostics = serde_json::json!({
            "clientSideRequestStatistics": {
                "requestStartTimeUtc": started.to_rfc3339(),
                "requestEndTimeUtc": Utc::now().to_rfc3339(),
                "preferredLocations": self.config.preferred_locations,
                "locationEndpointsContacted": contacted,
                "pageCount": pages,
            }
        });

        Ok(QueryResponse {
            resources,
            headers: first_headers.unwrap_or_default(),
            diagnostics: Some(diagnostics),
        })
    }

    /// Creates `document` through the global (write) endpoint.
    pub async fn create_document<T: Serialize>(
        &self,
        document: &T,
        partition_key: &serde_json::Value,
    ) -> Result<serde_json::Value, ClientError> {
        let link = self.collection_link();
        let url = join_endpoint(&self.config.endpoint, &format!("{link}/docs"))?;
        let partition_header = serde_json::to_string(&[partition_key])?;

        let response = self
            .signed(Method::POST, url, "docs", &link)?
            .header("x-ms-documentdb-partitionkey", partition_header)
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(document)?)
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        let response = ensure_success(response).await?;
        response.json().await.map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Reads account metadata from the global endpoint.
    pub async fn database_account(&self) -> Result<DatabaseAccount, ClientError> {
        let url = join_endpoint(&self.config.endpoint, "")?;
        let response = self
            .signed(Method::GET, url, "", "")?
            .send()
            .await
            .map_err(ClientError::from_transport)?;
        let response = ensure_success(response).await?;
        response.json().await.map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    async fn resolve_read_endpoint(
        &self,
        contacted: &mut Vec<String>,
    ) -> Result<&str, ClientError> {
        if self.config.preferred_locations.is_empty() {
            return Ok(self.config.endpoint.as_str());
        }

        let endpoint = self
            .read_endpoint
            .get_or_try_init(|| async move {
                record_contact(contacted, &self.config.endpoint);
                let account = self.database_account().await?;
                match account.read_endpoint_for(&self.config.preferred_locations) {
                    Some(found) => Ok::<_, ClientError>(found.to_string()),
                    None => {
                        tracing::debug!(
                            "None of {:?} is a readable location, reading from global endpoint",
                            self.config.preferred_locations
                        );
                        Ok(self.config.endpoint.clone())
                    },
                }
            })
            .await?;
        Ok(endpoint.as_str())
    }

    fn signed(
        &self,
        method: Method,
        url: Url,
        resource_type: &str,
        resource_link: &str,
    ) -> Result<RequestBuilder, ClientError> {
        let date = http_date(Utc::now());
        let token =
            authorization_token(&self.key, method.as_str(), resource_type, resource_link, &date)?;
        Ok(self
            .client
            .request(method, url)
            .header("authorization", token)
            .header("x-ms-date", date)
            .header("x-ms-version", API_VERSION)
            .header("accept", "application/json"))
    }

    fn collection_link(&self) -> String {
        format!("dbs/{}/colls/{}", self.config.database_id, self.config.container_id)
    }
}

fn join_endpoint(endpoint: &str, path: &str) -> Result<Url, ClientError> {
    let invalid = |reason: String| ClientError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };
    let base = if endpoint.ends_with('/') {
        endpoint.to_string()
    } else {
        format!("{endpoint}/")
    };
    Url::parse(&base)
        .map_err(|e| invalid(e.to_string()))?
        .join(path)
        .map_err(|e| invalid(e.to_string()))
}

fn record_contact(contacted: &mut Vec<String>, endpoint: &str) {
    if !contacted.iter().any(|seen| seen == endpoint) {
        contacted.push(endpoint.to_string());
    }
}

fn lowercase_headers(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value.to_str().ok().map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
        })
        .collect()
}

async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let (code, message) = match serde_json::from_str::<ServiceErrorBody>(&text) {
        Ok(body) => (body.code, body.message.unwrap_or(text)),
        Err(_) => (None, text),
    };
    let message = if message.is_empty() {
        status.canonical_reason().unwrap_or("unknown status").to_string()
    } else {
        message
    };

    Err(ClientError::ServiceError { status: status.as_u16(), code, message })
}
