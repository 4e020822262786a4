//! OpenAPI 3.x document handling
//!
//! Loads specs from JSON or YAML into a generic, order-preserving document
//! tree and extracts operation summaries from it.
//!
//! ## Usage
//! ```rust,ignore
//! use openapi_opid_parser::openapi::{extract_operations, SpecDocument};
//!
//! let doc = SpecDocument::load("teable.yaml", None)?;
//! let catalog = extract_operations(&doc);
//! println!("{} operations", catalog.operations.len());
//! ```

mod extractor;
mod parser;
mod types;

pub use extractor::extract_operations;
pub use parser::SpecDocument;
pub use types::*;
