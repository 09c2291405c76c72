//! Component-instance extraction for Swatch.
//!
//! Turns raw component nodes plus a component definition into canonical
//! [`ComponentInstance`](swatch_core::ComponentInstance) records: variant
//! parsing, effective-root resolution (including the legacy fallback),
//! per-part token-set extraction and merge, shared-variant diversion,
//! expansion, and deduplication.

pub mod instances;
pub mod tokens;

pub use instances::{extract_all, extract_component_instances, ExtractionJob};
pub use tokens::extract_token_set;
