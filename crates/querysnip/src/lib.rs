//! # querysnip
//!
//! This crate turns a JSON description of a console statistics query into a
//! fluent-API code snippet, for display and copy in the console's developer
//! tools. The generated text is a chain of builder calls; it is never parsed
//! back or executed.
//!
//! ## Architecture
//!
//! ```text
//! JSON text
//!     │
//!     ▼
//! ┌──────────────┐
//! │    query     │  serde data model (QueryDescription, JoinSpec, ...)
//! │ (JSON → AST) │
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   codegen    │  Emit fluent call chain, one call per line
//! │ (AST → text) │
//! └──────────────┘
//! ```
//!
//! The crate also carries the console's domain constant catalog (`domain`)
//! and the concurrent resource-loader dispatch (`resource`), which the
//! surrounding application uses independently of snippet generation.
//!
//! ## Usage
//!
//! ```rust
//! let snippet = querysnip::generate(r#"{"resource_type":"inventory.Server"}"#)?;
//! assert!(snippet.starts_with("fluentApi."));
//! # Ok::<(), querysnip::ParseError>(())
//! ```

pub mod codegen;
pub mod diagnostic;
pub mod domain;
pub mod query;
pub mod resource;

pub use diagnostic::ParseError;
pub use query::QueryDescription;

/// Generates the fluent-API snippet for a JSON query description.
///
/// This runs the full pipeline:
/// 1. Parse the JSON text into a [`QueryDescription`]
/// 2. Emit the call chain in fixed order (resource type, query, joins)
///
/// Parsing is the only failure point; emission over a parsed description
/// always succeeds. Malformed JSON fails fast with no partial output.
pub fn generate(raw: &str) -> Result<String, ParseError> {
    let description = QueryDescription::parse(raw)?;
    Ok(codegen::generate(&description))
}
