//! Parsing for Swatch: the selector-path DSL, its resolution against the
//! node tree, and variant-name parsing.

pub mod resolve;
pub mod selector;
pub mod variant;

pub use resolve::resolve_selector;
pub use selector::{parse_selector, Segment, SelectorPath};
pub use variant::parse_variant_properties;
