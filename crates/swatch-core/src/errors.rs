//! Error types for the Swatch engine.

use thiserror::Error;

/// Top-level error type for the Swatch engine.
#[derive(Debug, Error)]
pub enum SwatchError {
    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Errors parsing a selector path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("empty selector path")]
    Empty,

    #[error("malformed selector path: {path}")]
    Malformed { path: String },
}

/// Errors during component-instance extraction.
///
/// A missing root instance is fatal for the definition being processed;
/// rule-level configuration problems are warnings, not errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("component '{component}' has no INSTANCE descendant to use as its root")]
    MissingRootInstance { component: String },
}
