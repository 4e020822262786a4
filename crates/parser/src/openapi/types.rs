//! Operation catalog types
//!
//! Flat summary of a spec's operations, serialized with the field names
//! downstream tooling expects (`operationId`, not `operation_id`).

use serde::{Deserialize, Serialize};

/// Summary of a whole spec: its `info` block plus every identified operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationCatalog {
    /// API metadata
    pub info: CatalogInfo,

    /// Operations carrying an `operationId`, in document order
    pub operations: Vec<OperationSummary>,
}

/// API information copied from the spec's `info` block
///
/// Missing fields are empty strings rather than absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogInfo {
    pub title: String,
    pub version: String,
    pub description: String,
}

/// One operation of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationSummary {
    /// Operation ID (unique identifier)
    #[serde(rename = "operationId")]
    pub operation_id: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub summary: String,

    /// Path template (e.g., "/tables/{tableId}/records")
    pub path: String,

    /// Lower-case HTTP method token
    pub method: String,
}

impl OperationCatalog {
    /// Identifiers of all catalogued operations, in document order
    pub fn operation_ids(&self) -> Vec<&str> {
        self.operations
            .iter()
            .map(|op| op.operation_id.as_str())
            .collect()
    }
}
