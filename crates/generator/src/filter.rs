//! Allow-list filtering of operations
//!
//! Drops every operation whose `operationId` is not allowed, then drops
//! paths left without any operation.
//!
//! Only HTTP method keys are operations. Everything else under a path item
//! (`parameters`, `summary`, `servers`, `x-*`, unknown keys) is carried
//! through untouched but does not keep an otherwise empty path alive.

use openapi_opid_common::{AllowList, HttpMethod};
use openapi_opid_parser::SpecDocument;
use serde_json::Value;

/// Filter behavior switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Also remove operations that have no usable `operationId`
    pub drop_unidentified: bool,
}

/// Outcome of a filter pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterReport {
    /// Identifiers of operations still in the spec, in document order
    pub kept: Vec<String>,

    /// Operations removed
    pub removed_operations: usize,

    /// Paths removed because no operation was left under them
    pub removed_paths: Vec<String>,
}

/// Reduce a spec to the operations named in `allow`
pub fn filter_operations(
    doc: &mut SpecDocument,
    allow: &AllowList,
    options: FilterOptions,
) -> FilterReport {
    let mut report = FilterReport::default();
    let Some(paths) = doc.paths_mut() else {
        return report;
    };

    for (path, path_item) in paths.iter_mut() {
        let Some(path_item) = path_item.as_object_mut() else {
            continue;
        };

        let before = path_item.len();
        path_item.retain(|key, operation| {
            if !HttpMethod::is_operation_key(key) {
                return true;
            }
            match operation
                .get("operationId")
                .and_then(Value::as_str)
                .filter(|id| !id.is_empty())
            {
                Some(id) if allow.contains(id) => {
                    report.kept.push(id.to_string());
                    true
                }
                Some(_) => false,
                None => !options.drop_unidentified,
            }
        });
        report.removed_operations += before - path_item.len();

        if !path_item.keys().any(|key| HttpMethod::is_operation_key(key)) {
            report.removed_paths.push(path.clone());
        }
    }

    for path in &report.removed_paths {
        paths.shift_remove(path);
    }

    report
}
