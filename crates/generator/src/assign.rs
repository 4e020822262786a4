//! operationId assignment passes over a whole spec
//!
//! A pass walks `paths` in document order and, inside each path item, the
//! methods `get`, `post`, `put`, `patch`, `delete` in that order. Which
//! operations receive a fresh identifier depends on the [`AssignPolicy`].

use crate::registry::IdRegistry;
use crate::synthesizer::synthesize_operation_id;
use openapi_opid_common::HttpMethod;
use openapi_opid_parser::SpecDocument;
use serde_json::{Map, Value};

/// Which operations a pass (re)assigns identifiers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignPolicy {
    /// Only operations whose `operationId` is absent, not a string, or empty
    FillMissing,

    /// Every operation, discarding existing identifiers
    ForceRewrite,

    /// Clear every identifier, then assign to the first N operations only
    FirstN(usize),
}

/// One identifier written by a pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub path: String,
    pub method: HttpMethod,
    pub operation_id: String,
}

/// Outcome of an assignment pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignReport {
    /// Identifiers written, in pass order
    pub assigned: Vec<Assignment>,

    /// Existing identifiers removed before assigning (`FirstN` only)
    pub cleared: usize,

    /// Operations visited by the pass
    pub visited: usize,
}

impl AssignReport {
    /// Whether the pass changed the document
    pub fn is_modified(&self) -> bool {
        !self.assigned.is_empty() || self.cleared > 0
    }
}

/// Run an assignment pass over a spec
///
/// # Example
/// ```rust,ignore
/// let report = assign_operation_ids(&mut doc, AssignPolicy::FillMissing);
/// if report.is_modified() {
///     doc.save(path, None)?;
/// }
/// ```
pub fn assign_operation_ids(doc: &mut SpecDocument, policy: AssignPolicy) -> AssignReport {
    let mut report = AssignReport::default();
    let Some(paths) = doc.paths_mut() else {
        return report;
    };

    let mut registry = IdRegistry::new();

    match policy {
        AssignPolicy::FillMissing => {
            // Kept identifiers are taken before any new one is synthesized
            for_each_operation(paths, |_, _, operation| {
                if let Some(id) = usable_operation_id(operation) {
                    registry.insert(id);
                }
            });
            for_each_operation(paths, |path, method, operation| {
                report.visited += 1;
                if usable_operation_id(operation).is_none() {
                    assign(path, method, operation, &mut registry, &mut report);
                }
            });
        }
        AssignPolicy::ForceRewrite => {
            for_each_operation(paths, |path, method, operation| {
                report.visited += 1;
                assign(path, method, operation, &mut registry, &mut report);
            });
        }
        AssignPolicy::FirstN(limit) => {
            for_each_operation(paths, |_, _, operation| {
                if operation.shift_remove("operationId").is_some() {
                    report.cleared += 1;
                }
            });
            for_each_operation(paths, |path, method, operation| {
                report.visited += 1;
                if report.assigned.len() < limit {
                    assign(path, method, operation, &mut registry, &mut report);
                }
            });
        }
    }

    report
}

/// Synthesize, write back and register one identifier
fn assign(
    path: &str,
    method: HttpMethod,
    operation: &mut Map<String, Value>,
    registry: &mut IdRegistry,
    report: &mut AssignReport,
) {
    let id = synthesize_operation_id(method.as_str(), path, operation, registry);
    operation.insert("operationId".to_string(), Value::String(id.clone()));
    registry.insert(id.clone());
    report.assigned.push(Assignment {
        path: path.to_string(),
        method,
        operation_id: id,
    });
}

/// A string, non-empty `operationId`
fn usable_operation_id(operation: &Map<String, Value>) -> Option<&str> {
    operation
        .get("operationId")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
}

/// Visit every operation mapping in pass order
///
/// Non-mapping path items and non-mapping operations are skipped.
fn for_each_operation<F>(paths: &mut Map<String, Value>, mut visit: F)
where
    F: FnMut(&str, HttpMethod, &mut Map<String, Value>),
{
    for (path, path_item) in paths.iter_mut() {
        let Some(path_item) = path_item.as_object_mut() else {
            continue;
        };
        for method in HttpMethod::SYNTHESIS_ORDER {
            if let Some(operation) = path_item
                .get_mut(method.as_str())
                .and_then(Value::as_object_mut)
            {
                visit(path.as_str(), method, operation);
            }
        }
    }
}
