//! Bulk delete DTOs.
//!
//! The request body is `{"ids": [...]}`. The response is only inspected by
//! dashboards that reconcile in place; the others look at the HTTP status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary key of a dashboard row as carried by its checkbox value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Number(i64),
    Text(String),
}

impl RowId {
    /// Parses an integer id, keeping the raw value when it is not one.
    pub fn integer_or_text(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(n) => RowId::Number(n),
            Err(_) => RowId::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Number(n) => write!(f, "{}", n),
            RowId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<RowId>,
}

impl BulkDeleteRequest {
    pub fn new(ids: Vec<RowId>) -> Self {
        Self { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Response of a bulk delete endpoint that reports per-request results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkDeleteResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
