//! OpenAPI spec file loading and saving

use crate::format::SpecFormat;
use openapi_opid_common::{HttpMethod, OpidError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// A loaded OpenAPI 3.x specification
///
/// Holds the whole document as a generic tree so that fields this tool
/// never looks at survive a load/save cycle untouched and in order.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecDocument {
    value: Value,
}

impl SpecDocument {
    /// Load a spec from file path
    ///
    /// The format is sniffed from the file extension unless given.
    ///
    /// # Example
    /// ```rust,ignore
    /// let doc = SpecDocument::load("openapi.yaml", None)?;
    /// ```
    pub fn load<P: AsRef<Path>>(path: P, format: Option<SpecFormat>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            OpidError::Parse(format!(
                "Failed to read OpenAPI file {}: {}",
                path.display(),
                e
            ))
        })?;

        let format = format.unwrap_or_else(|| SpecFormat::from_path(path));
        Self::parse_str(&content, format)
    }

    /// Parse a spec from text in the given format
    pub fn parse_str(content: &str, format: SpecFormat) -> Result<Self> {
        let value = format.codec().decode(content)?;
        Self::from_value(value)
    }

    /// Wrap an already-parsed tree, checking it is an OpenAPI 3.x document
    pub fn from_value(value: Value) -> Result<Self> {
        let Some(root) = value.as_object() else {
            return Err(OpidError::Validation(
                "Not a valid OpenAPI 3.x.x specification: document is not a mapping".to_string(),
            ));
        };

        match root.get("openapi").and_then(Value::as_str) {
            Some(version) if version.starts_with("3.") => {}
            Some(version) => {
                return Err(OpidError::Validation(format!(
                    "Not a valid OpenAPI 3.x.x specification: unsupported version {}",
                    version
                )))
            }
            None => {
                return Err(OpidError::Validation(
                    "Not a valid OpenAPI 3.x.x specification: missing openapi version".to_string(),
                ))
            }
        }

        if let Some(paths) = root.get("paths") {
            if !paths.is_object() {
                return Err(OpidError::Validation(
                    "`paths` must be a mapping".to_string(),
                ));
            }
        }

        Ok(Self { value })
    }

    /// Write the spec to a file
    ///
    /// The format is sniffed from the target extension unless given.
    pub fn save<P: AsRef<Path>>(&self, path: P, format: Option<SpecFormat>) -> Result<()> {
        let path = path.as_ref();
        let format = format.unwrap_or_else(|| SpecFormat::from_path(path));
        let content = self.to_string(format)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Serialize the spec in the given format
    pub fn to_string(&self, format: SpecFormat) -> Result<String> {
        format.codec().encode(&self.value)
    }

    /// The `openapi` version string (always starts with "3.")
    pub fn openapi_version(&self) -> &str {
        self.value
            .get("openapi")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// The `paths` mapping, if present
    pub fn paths(&self) -> Option<&Map<String, Value>> {
        self.value.get("paths").and_then(Value::as_object)
    }

    /// Mutable access to the `paths` mapping, if present
    pub fn paths_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.value.get_mut("paths").and_then(Value::as_object_mut)
    }

    /// Number of operations under `paths`, counting every HTTP method key
    pub fn operation_count(&self) -> usize {
        self.paths()
            .map(|paths| {
                paths
                    .values()
                    .filter_map(Value::as_object)
                    .flat_map(|item| item.keys())
                    .filter(|key| HttpMethod::is_operation_key(key))
                    .count()
            })
            .unwrap_or(0)
    }

    /// Get reference to the underlying document tree
    pub fn value(&self) -> &Value {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_minimal_openapi() {
        let openapi_json = r#"{
            "openapi": "3.0.0",
            "info": {
                "title": "Test API",
                "version": "1.0.0"
            },
            "paths": {}
        }"#;

        let doc = SpecDocument::parse_str(openapi_json, SpecFormat::Json);
        assert!(doc.is_ok());

        let doc = doc.unwrap();
        assert_eq!(doc.openapi_version(), "3.0.0");
        assert_eq!(doc.operation_count(), 0);
    }

    #[test]
    fn test_rejects_swagger_2() {
        let err = SpecDocument::from_value(json!({ "swagger": "2.0", "paths": {} })).unwrap_err();
        assert!(matches!(err, OpidError::Validation(_)));
    }

    #[test]
    fn test_rejects_non_string_version() {
        let err = SpecDocument::from_value(json!({ "openapi": 3.1 })).unwrap_err();
        assert!(err.to_string().contains("missing openapi version"));
    }

    #[test]
    fn test_rejects_non_mapping_root() {
        let err = SpecDocument::from_value(json!(["openapi", "3.0.0"])).unwrap_err();
        assert!(err.to_string().contains("not a mapping"));
    }

    #[test]
    fn test_operation_count_ignores_non_method_keys() {
        let doc = SpecDocument::from_value(json!({
            "openapi": "3.1.0",
            "paths": {
                "/records": {
                    "parameters": [],
                    "x-rate-limit": 10,
                    "get": {},
                    "post": {}
                },
                "/health": { "head": {} }
            }
        }))
        .unwrap();

        assert_eq!(doc.operation_count(), 3);
    }
}
