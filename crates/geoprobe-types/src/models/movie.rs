//! Movie records accepted by the catalog endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Incoming movie as posted by the web UI.
///
/// `title`, `genres` and `year` are required; the two score fields keep the
/// web UI's spelling on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewMovie {
    #[validate(required, length(min = 1_u64))]
    pub title: Option<String>,
    #[validate(required)]
    pub genres: Option<Vec<String>>,
    #[validate(required, range(min = 1_i32))]
    pub year: Option<i32>,
    #[serde(rename = "Rating", default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<serde_json::Value>,
    #[serde(rename = "Rotton Tomato", default, skip_serializing_if = "Option::is_none")]
    pub rotten_tomato: Option<serde_json::Value>,
}

/// Stored movie document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDocument {
    pub id: String,
    /// Partition key; mirrors `id`
    pub movie: String,
    pub genres: Vec<String>,
    pub year: i32,
    pub title: String,
    #[serde(rename = "Rating", default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<serde_json::Value>,
    #[serde(rename = "Rotton Tomato", default, skip_serializing_if = "Option::is_none")]
    pub rotten_tomato: Option<serde_json::Value>,
}

impl MovieDocument {
    /// Document id: whitespace runs in the title become `-`, then `-<year>`.
    pub fn derive_id(title: &str, year: i32) -> String {
        let mut slug = String::with_capacity(title.len());
        let mut in_space = false;
        for c in title.chars() {
            if c.is_whitespace() {
                if !in_space {
                    slug.push('-');
                }
                in_space = true;
            } else {
                slug.push(c);
                in_space = false;
            }
        }
        format!("{slug}-{year}")
    }
}
