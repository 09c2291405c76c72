//! Component-definition configuration.
//!
//! Definitions are loaded once per build by the caller (typically from JSON
//! config files) and stay immutable during extraction.

use std::collections::HashMap;

/// Static configuration for one component: which sub-nodes carry which
/// style categories, and how the results are named.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ComponentDefinition {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub parts: Vec<PartDefinition>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub options: DefinitionOptions,
}

/// A named sub-region of a component with its own export rules.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PartDefinition {
    /// Part id; `$` names the component root itself.
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tokens: Vec<ExportRule>,
}

/// One export rule: a selector path and the exportable kinds to read there.
///
/// `export` entries are kept as strings so an unrecognized kind is a
/// per-rule warning at extraction time, not a config-load failure.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ExportRule {
    #[cfg_attr(feature = "serde", serde(default))]
    pub from: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub export: Vec<String>,
}

/// Per-definition options.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DefinitionOptions {
    #[cfg_attr(feature = "serde", serde(default))]
    pub exporter: ExporterOptions,
    #[cfg_attr(feature = "serde", serde(default))]
    pub transformer: TransformerOptions,
}

/// Options governing extraction.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ExporterOptions {
    #[cfg_attr(feature = "serde", serde(default))]
    pub variant_properties: VariantPropertySchema,
    #[cfg_attr(feature = "serde", serde(default))]
    pub shared_variants: Vec<SharedVariantRule>,
}

/// The variant-property axes a definition recognizes.
///
/// Declared order is design axes followed by layout axes; name generation
/// depends on it. Layout axes also drive the legacy root fallback.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct VariantPropertySchema {
    #[cfg_attr(feature = "serde", serde(default))]
    pub design: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub layout: Vec<String>,
}

impl VariantPropertySchema {
    /// All recognized property names in declared order.
    pub fn declared(&self) -> impl Iterator<Item = &String> {
        self.design.iter().chain(self.layout.iter())
    }
}

/// Declares that the component identified by `component_id` is the single
/// authored source for one variant-property axis, cloned into sibling
/// instances that match on the distinctive properties.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SharedVariantRule {
    pub component_id: String,
    pub shared_variant_property: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub distinctive_variant_properties: Vec<String>,
}

/// Naming configuration shared by every output backend.
///
/// The same shape serves as the process-wide options object and as a
/// definition's own table; [`TransformerOptions::overlaid_on`] resolves the
/// two into the effective options for one definition.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TransformerOptions {
    /// Default value per variant property; matching values elide from names.
    #[cfg_attr(feature = "serde", serde(default))]
    pub defaults: HashMap<String, String>,
    /// Per-property raw-value replacements applied before elision.
    #[cfg_attr(feature = "serde", serde(default))]
    pub replace: HashMap<String, HashMap<String, String>>,
    /// Ordered name-segment templates; absent means the built-in segment order.
    pub token_name_segments: Option<Vec<String>>,
    /// Root class for the CSS text block; absent means the component name.
    pub css_root_class: Option<String>,
}

impl TransformerOptions {
    /// Resolve these (per-definition) options against a global base.
    ///
    /// Map entries union with this table's entries winning; optional fields
    /// take this table's value when set.
    pub fn overlaid_on(&self, base: &TransformerOptions) -> TransformerOptions {
        let mut defaults = base.defaults.clone();
        defaults.extend(self.defaults.iter().map(|(k, v)| (k.clone(), v.clone())));

        let mut replace = base.replace.clone();
        for (prop, table) in &self.replace {
            replace
                .entry(prop.clone())
                .or_default()
                .extend(table.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        TransformerOptions {
            defaults,
            replace,
            token_name_segments: self
                .token_name_segments
                .clone()
                .or_else(|| base.token_name_segments.clone()),
            css_root_class: self
                .css_root_class
                .clone()
                .or_else(|| base.css_root_class.clone()),
        }
    }
}
