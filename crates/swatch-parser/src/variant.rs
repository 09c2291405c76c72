//! Variant-name parsing.
//!
//! Raw component names embed their variant combination as `key=value` pairs,
//! e.g. `Theme=light, Type=primary, State=default`.

use swatch_core::VariantPropertyMap;

/// Parse a raw component name into an ordered variant-property map.
///
/// Only configured property names are recognized (matched
/// case-insensitively, stored under the configured spelling); everything
/// else in the name is ignored. Entries keep the order they appear in the
/// raw name, which instance identity depends on.
pub fn parse_variant_properties<'a>(
    raw_name: &str,
    recognized: impl IntoIterator<Item = &'a str>,
) -> VariantPropertyMap {
    let recognized: Vec<&str> = recognized.into_iter().collect();
    let mut map = VariantPropertyMap::new();
    for token in raw_name.split(',') {
        let Some((key, value)) = token.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        if let Some(canonical) = recognized.iter().find(|p| p.eq_ignore_ascii_case(key)) {
            map.insert(*canonical, value.trim());
        }
    }
    map
}
