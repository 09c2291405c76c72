//! Component instances and variant-property maps.

use indexmap::IndexMap;

use crate::tokens::TokenSet;

/// Ordered mapping from variant-property name to value.
///
/// Insertion order is the parse order of the raw component name and is
/// significant: instance identity and generated names both depend on it, so
/// this is never a sorted or hashed map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantPropertyMap {
    properties: IndexMap<String, String>,
}

impl VariantPropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property value. Re-inserting an existing property keeps its
    /// original position.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(property.into(), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(|s| s.as_str())
    }

    pub fn contains(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Derive the deterministic instance id: `prop-value` pairs joined by
    /// `-` in insertion order. Equal variant values produce equal ids.
    pub fn id(&self) -> String {
        self.properties
            .iter()
            .map(|(prop, value)| format!("{prop}-{value}"))
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl FromIterator<(String, String)> for VariantPropertyMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}

/// One canonical instance of a component variant combination.
///
/// Created by extraction, optionally cloned by shared-variant expansion,
/// immutable thereafter; lives for one build pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ComponentInstance {
    pub id: String,
    pub name: String,
    pub description: String,
    pub variant_properties: VariantPropertyMap,
    /// Token sets per part id; at most one record per kind after merge.
    pub parts: IndexMap<String, Vec<TokenSet>>,
    pub definition_id: String,
}
