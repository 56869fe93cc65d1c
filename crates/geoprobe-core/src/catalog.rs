//! Movie creation.
//!
//! Validates the incoming record, derives the document id and writes it
//! through a [`DocumentStore`].

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use geoprobe_client::{ClientError, CosmosClient};
use geoprobe_types::{MovieDocument, NewMovie};

use crate::error::{AppError, AppResult};

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: title, genres, or year";

/// Write side of the document service.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn create(
        &self,
        document: &serde_json::Value,
        partition_key: &serde_json::Value,
    ) -> Result<serde_json::Value, ClientError>;
}

#[async_trait]
impl DocumentStore for CosmosClient {
    async fn create(
        &self,
        document: &serde_json::Value,
        partition_key: &serde_json::Value,
    ) -> Result<serde_json::Value, ClientError> {
        self.create_document(document, partition_key).await
    }
}

#[derive(Clone)]
pub struct MovieCatalog {
    store: Arc<dyn DocumentStore>,
    partition_key_path: String,
}

impl MovieCatalog {
    pub fn new(store: Arc<dyn DocumentStore>, partition_key_path: impl Into<String>) -> Self {
        Self { store, partition_key_path: partition_key_path.into() }
    }

    pub fn partition_key_path(&self) -> &str {
        &self.partition_key_path
    }

    /// Turns a posted movie into the stored document shape.
    pub fn build_document(movie: NewMovie) -> AppResult<MovieDocument> {
        if movie.validate().is_err() {
            return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }
        let (Some(title), Some(genres), Some(year)) = (movie.title, movie.genres, movie.year)
        else {
            return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        };

        let id = MovieDocument::derive_id(&title, year);
        Ok(MovieDocument {
            movie: id.clone(),
            id,
            genres,
            year,
            title,
            rating: movie.rating,
            rotten_tomato: movie.rotten_tomato,
        })
    }

    /// Validates and stores `movie`, returning the document as written.
    pub async fn add(&self, movie: NewMovie) -> AppResult<MovieDocument> {
        let document = Self::build_document(movie)?;
        let body = serde_json::to_value(&document)?;
        let partition_key =
            body.pointer(&self.partition_key_path).cloned().unwrap_or(serde_json::Value::Null);

        self.store.create(&body, &partition_key).await.map_err(|e| {
            tracing::error!("[Catalog] failed to add {}: {}", document.id, e);
            AppError::Client(e)
        })?;

        tracing::info!("🎬 Added movie {}", document.id);
        Ok(document)
    }
}
