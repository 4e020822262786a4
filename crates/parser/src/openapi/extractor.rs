//! Extracts an operation catalog from a spec document

use super::parser::SpecDocument;
use super::types::{CatalogInfo, OperationCatalog, OperationSummary};
use openapi_opid_common::HttpMethod;
use serde_json::Value;

/// Build the operation catalog of a spec
///
/// Lists every HTTP method entry that carries a string `operationId`, in
/// document order. Entries without an identifier are skipped.
pub fn extract_operations(doc: &SpecDocument) -> OperationCatalog {
    let mut operations = Vec::new();

    for (path, path_item) in doc.paths().into_iter().flatten() {
        let Some(path_item) = path_item.as_object() else {
            continue;
        };

        for (method, operation) in path_item {
            if !HttpMethod::is_operation_key(method) {
                continue;
            }
            let Some(operation_id) = operation.get("operationId").and_then(Value::as_str) else {
                continue;
            };

            operations.push(OperationSummary {
                operation_id: operation_id.to_string(),
                description: string_field(operation, "description"),
                summary: string_field(operation, "summary"),
                path: path.clone(),
                method: method.clone(),
            });
        }
    }

    let info = doc.value().get("info");
    OperationCatalog {
        info: CatalogInfo {
            title: info.map(|i| string_field(i, "title")).unwrap_or_default(),
            version: info.map(|i| string_field(i, "version")).unwrap_or_default(),
            description: info
                .map(|i| string_field(i, "description"))
                .unwrap_or_default(),
        },
        operations,
    }
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_info_fields_are_empty() {
        let doc = SpecDocument::from_value(json!({
            "openapi": "3.0.3",
            "info": { "title": "Records" },
            "paths": {}
        }))
        .unwrap();

        let catalog = extract_operations(&doc);
        assert_eq!(catalog.info.title, "Records");
        assert_eq!(catalog.info.version, "");
        assert_eq!(catalog.info.description, "");
        assert!(catalog.operations.is_empty());
    }

    #[test]
    fn test_skips_unidentified_and_extension_entries() {
        let doc = SpecDocument::from_value(json!({
            "openapi": "3.0.3",
            "paths": {
                "/records": {
                    "x-meta": { "operationId": "notAnOperation" },
                    "get": { "operationId": "getListRecords", "summary": "List Records" },
                    "post": { "summary": "Create" }
                }
            }
        }))
        .unwrap();

        let catalog = extract_operations(&doc);
        assert_eq!(catalog.operation_ids(), vec!["getListRecords"]);
        assert_eq!(catalog.operations[0].summary, "List Records");
        assert_eq!(catalog.operations[0].method, "get");
    }
}
