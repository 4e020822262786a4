//! Spec loading for openapi-opid
//!
//! This crate reads OpenAPI 3.x documents into a generic, order-preserving
//! tree (`SpecDocument`), writes them back out, and summarizes their
//! operations.
//!
//! ## Formats
//!
//! JSON and YAML are both supported through the [`SpecCodec`] strategy:
//! - `.yaml` / `.yml` → [`YamlCodec`]
//! - anything else → [`JsonCodec`]
//!
//! The document tree is the same whichever codec produced it, so the
//! rewriting passes in `openapi-opid-generator` never see the format.

mod format;
pub mod openapi;

pub use format::{JsonCodec, SpecCodec, SpecFormat, YamlCodec};
pub use openapi::{
    extract_operations, CatalogInfo, OperationCatalog, OperationSummary, SpecDocument,
};
