//! Shared-variant expansion for Swatch component instances.
//!
//! A variant axis authored once on a dedicated component is cloned into
//! every matching "default" instance elsewhere, so the axis never has to be
//! re-authored per component.

pub mod expander;

pub use expander::{dedupe_by_id, expand_shared_variants, SharedVariantSource};
