//! Serialization formats for spec documents
//!
//! Each format is a [`SpecCodec`] that turns text into the generic document
//! tree and back. Callers pick a codec through [`SpecFormat`], usually by
//! sniffing the file extension, and never branch on the format themselves.

use openapi_opid_common::{OpidError, Result};
use serde_json::{Map, Number, Value};
use std::fmt;
use std::path::Path;

/// Decodes and encodes a spec document in one serialization format
pub trait SpecCodec {
    /// Parse text into a document tree
    fn decode(&self, content: &str) -> Result<Value>;

    /// Serialize a document tree to text
    fn encode(&self, value: &Value) -> Result<String>;
}

/// Pretty-printed JSON with two-space indentation
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl SpecCodec for JsonCodec {
    fn decode(&self, content: &str) -> Result<Value> {
        serde_json::from_str(content)
            .map_err(|e| OpidError::Parse(format!("Failed to parse JSON: {}", e)))
    }

    fn encode(&self, value: &Value) -> Result<String> {
        let mut out = serde_json::to_string_pretty(value)?;
        out.push('\n');
        Ok(out)
    }
}

/// Block-style YAML
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec;

impl SpecCodec for YamlCodec {
    fn decode(&self, content: &str) -> Result<Value> {
        let mut yaml: serde_yaml::Value = serde_yaml::from_str(content)
            .map_err(|e| OpidError::Parse(format!("Failed to parse YAML: {}", e)))?;
        // `<<: *anchor` entries are folded into their mapping before conversion
        yaml.apply_merge()
            .map_err(|e| OpidError::Parse(format!("Failed to apply YAML merge keys: {}", e)))?;
        yaml_to_json(yaml)
    }

    fn encode(&self, value: &Value) -> Result<String> {
        Ok(serde_yaml::to_string(value)?)
    }
}

/// Convert a YAML tree into the JSON document model
///
/// OpenAPI YAML often uses unquoted response codes (`200:`), which YAML
/// reads as integers. JSON objects only have string keys, so scalar keys
/// are stringified.
fn yaml_to_json(yaml: serde_yaml::Value) -> Result<Value> {
    Ok(match yaml {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => yaml_number_to_json(&n),
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>>>()?,
        ),
        serde_yaml::Value::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                object.insert(yaml_key_to_string(key)?, yaml_to_json(value)?);
            }
            Value::Object(object)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

/// JSON has no infinities or NaN, so `.inf`, `-.inf` and `.nan` are kept
/// as strings in their YAML spelling
fn yaml_number_to_json(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        return Value::Number(i.into());
    }
    if let Some(u) = n.as_u64() {
        return Value::Number(u.into());
    }
    n.as_f64()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(n.to_string()))
}

fn yaml_key_to_string(key: serde_yaml::Value) -> Result<String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Null => Ok("null".to_string()),
        other => Err(OpidError::Parse(format!(
            "Unsupported YAML mapping key: {:?}",
            other
        ))),
    }
}

/// Serialization format of a spec file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Json,
    Yaml,
}

impl SpecFormat {
    /// Pick a format from the file extension
    ///
    /// `.yaml` and `.yml` (any case) are YAML; everything else is JSON.
    ///
    /// # Examples
    /// ```
    /// use openapi_opid_parser::SpecFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(SpecFormat::from_path(Path::new("api.YML")), SpecFormat::Yaml);
    /// assert_eq!(SpecFormat::from_path(Path::new("api.json")), SpecFormat::Json);
    /// assert_eq!(SpecFormat::from_path(Path::new("api")), SpecFormat::Json);
    /// ```
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => SpecFormat::Yaml,
            _ => SpecFormat::Json,
        }
    }

    /// Codec implementing this format
    pub fn codec(&self) -> &'static dyn SpecCodec {
        match self {
            SpecFormat::Json => &JsonCodec,
            SpecFormat::Yaml => &YamlCodec,
        }
    }
}

impl fmt::Display for SpecFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecFormat::Json => write!(f, "JSON"),
            SpecFormat::Yaml => write!(f, "YAML"),
        }
    }
}
