//! operationId generation and spec rewriting
//!
//! This crate rewrites loaded `SpecDocument`s:
//! - [`synthesize_operation_id`] derives one identifier from an operation
//! - [`assign_operation_ids`] runs a whole-document pass under an
//!   [`AssignPolicy`]
//! - [`filter_operations`] reduces a spec to an allow-list of identifiers
//!
//! Identifier synthesis is pure: uniqueness is tracked in an explicit
//! [`IdRegistry`] owned by the pass that uses it.

mod assign;
mod filter;
mod registry;
mod synthesizer;

pub use assign::{assign_operation_ids, AssignPolicy, AssignReport, Assignment};
pub use filter::{filter_operations, FilterOptions, FilterReport};
pub use registry::IdRegistry;
pub use synthesizer::{synthesize_operation_id, verb_prefix, UNNAMED_OPERATION};
