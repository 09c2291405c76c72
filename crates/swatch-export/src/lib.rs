//! Token output formats for Swatch.
//!
//! Supported targets:
//! - CSS custom properties (`--button-primary-background`)
//! - SCSS variables (`$button-primary-background`)
//! - A nested style-dictionary JSON tree
//! - A flat key/value map
//!
//! All four share one transformer: property derivation, segment templates,
//! replacement rules, default elision, numeric formatting, and color
//! composition live in [`transformer`]; each backend only decides how the
//! finished segments become a name.

pub mod css;
pub mod map;
pub mod scss;
pub mod style_dictionary;
pub mod transformer;

pub use css::{css_variables, transform_css};
pub use map::transform_map;
pub use scss::{scss_variables, transform_scss};
pub use style_dictionary::transform_style_dictionary;
pub use transformer::{component_tokens, NamedVariable, TokenRecord, VariableMetadata};
