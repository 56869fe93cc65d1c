//! Read issued identically to every region.

use serde::{Deserialize, Serialize};

/// A named query parameter (`@name`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryParameter {
    pub name: String,
    pub value: serde_json::Value,
}

/// SQL-style query in the document service's wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub query: String,
    #[serde(default)]
    pub parameters: Vec<QueryParameter>,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self { query: text.into(), parameters: Vec::new() }
    }

    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.parameters.push(QueryParameter { name: name.into(), value });
        self
    }
}
