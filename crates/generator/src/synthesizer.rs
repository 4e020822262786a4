//! operationId synthesis
//!
//! Builds a camelCase identifier from an operation's metadata:
//! - verb prefix from the HTTP method (`post` → `create`, ...)
//! - base name from the summary, else the first tag, else the path
//!
//! Collisions with identifiers already in the [`IdRegistry`] are resolved
//! with a numeric suffix (`getRecord`, `getRecord1`, `getRecord2`, ...).

use crate::registry::IdRegistry;
use openapi_opid_common::HttpMethod;
use serde_json::{Map, Value};

/// Identifier used when nothing usable survives sanitizing
pub const UNNAMED_OPERATION: &str = "unnamedOperation";

/// Verb prefix for an HTTP method token
///
/// Tokens are matched case-insensitively; anything outside the five
/// CRUD-style methods becomes `perform`.
///
/// # Examples
/// ```
/// use openapi_opid_generator::verb_prefix;
///
/// assert_eq!(verb_prefix("post"), "create");
/// assert_eq!(verb_prefix("PATCH"), "modify");
/// assert_eq!(verb_prefix("options"), "perform");
/// ```
pub fn verb_prefix(method: &str) -> &'static str {
    match method.to_ascii_lowercase().parse::<HttpMethod>() {
        Ok(HttpMethod::Get) => "get",
        Ok(HttpMethod::Post) => "create",
        Ok(HttpMethod::Put) => "update",
        Ok(HttpMethod::Patch) => "modify",
        Ok(HttpMethod::Delete) => "delete",
        _ => "perform",
    }
}

/// Synthesize an identifier for one operation
///
/// The result is non-empty and not present in `registry`. The registry is
/// not modified; the caller records the result before the next call.
///
/// # Examples
/// ```
/// use openapi_opid_generator::{synthesize_operation_id, IdRegistry};
/// use serde_json::json;
///
/// let mut registry = IdRegistry::new();
/// let op = json!({ "summary": "List Records", "tags": ["tables"] });
/// let op = op.as_object().unwrap();
///
/// let first = synthesize_operation_id("get", "/records", op, &registry);
/// assert_eq!(first, "getListRecords");
///
/// registry.insert(first);
/// let second = synthesize_operation_id("get", "/records", op, &registry);
/// assert_eq!(second, "getListRecords1");
/// ```
pub fn synthesize_operation_id(
    method: &str,
    path: &str,
    operation: &Map<String, Value>,
    registry: &IdRegistry,
) -> String {
    let base_id = candidate_id(method, path, operation);

    if !registry.contains(&base_id) {
        return base_id;
    }

    let mut counter: u64 = 1;
    loop {
        let suffixed = format!("{}{}", base_id, counter);
        if !registry.contains(&suffixed) {
            return suffixed;
        }
        counter += 1;
    }
}

/// Identifier before collision resolution
fn candidate_id(method: &str, path: &str, operation: &Map<String, Value>) -> String {
    let assembled = format!("{}{}", verb_prefix(method), base_name(path, operation));

    let mut id: String = assembled
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();

    if id.is_empty() {
        return UNNAMED_OPERATION.to_string();
    }

    // Only ASCII remains, so the first byte is a whole char
    id[..1].make_ascii_lowercase();
    id
}

/// Base name in priority order: summary, first tag, path segments
fn base_name(path: &str, operation: &Map<String, Value>) -> String {
    if let Some(summary) = operation
        .get("summary")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
    {
        return summary.split_whitespace().map(capitalize_first).collect();
    }

    let first_tag = operation
        .get("tags")
        .and_then(Value::as_array)
        .and_then(|tags| tags.first());
    if let Some(tag) = first_tag {
        // Non-string tags are treated like no tags at all
        if let Some(tag) = tag.as_str() {
            return capitalize_first(tag);
        }
    }

    let segments: String = path
        .split('/')
        .map(|segment| segment.trim_matches(['{', '}']))
        .filter(|segment| !segment.is_empty())
        .map(capitalize_first)
        .collect();

    if segments.is_empty() {
        "root".to_string()
    } else {
        segments
    }
}

/// Upper-case the first character, leaving the rest as written
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
