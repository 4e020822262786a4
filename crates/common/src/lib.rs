//! Common types and utilities for openapi-opid
//!
//! This crate contains the shared error type, HTTP method vocabulary and
//! allow-list configuration used across the parser, generator, and CLI
//! components.

mod allow_list;

pub use allow_list::AllowList;

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while reading or rewriting a specification
#[derive(Error, Debug)]
pub enum OpidError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for openapi-opid operations
pub type Result<T> = std::result::Result<T, OpidError>;

/// HTTP methods that can carry an operation under an OpenAPI path item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl HttpMethod {
    /// Methods visited by an identifier synthesis pass, in visiting order
    pub const SYNTHESIS_ORDER: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
    ];

    /// Lower-case token as it appears as a path item key
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
            HttpMethod::Trace => "trace",
        }
    }

    /// Whether a path item key names an operation
    ///
    /// # Examples
    /// ```
    /// use openapi_opid_common::HttpMethod;
    ///
    /// assert!(HttpMethod::is_operation_key("get"));
    /// assert!(!HttpMethod::is_operation_key("parameters"));
    /// assert!(!HttpMethod::is_operation_key("x-internal"));
    /// ```
    pub fn is_operation_key(key: &str) -> bool {
        key.parse::<HttpMethod>().is_ok()
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = OpidError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "get" => Ok(HttpMethod::Get),
            "put" => Ok(HttpMethod::Put),
            "post" => Ok(HttpMethod::Post),
            "delete" => Ok(HttpMethod::Delete),
            "options" => Ok(HttpMethod::Options),
            "head" => Ok(HttpMethod::Head),
            "patch" => Ok(HttpMethod::Patch),
            "trace" => Ok(HttpMethod::Trace),
            other => Err(OpidError::Parse(format!("Unknown HTTP method: {}", other))),
        }
    }
}
