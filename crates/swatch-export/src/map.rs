//! Flat key/value map output.

use indexmap::IndexMap;

use swatch_core::{ComponentDefinition, ComponentInstance, TransformerOptions};

use crate::transformer::component_tokens;

/// Render a definition's instances as a flat map, the hyphen-joined
/// segments used verbatim as keys. Insertion order follows the instance
/// and token order.
pub fn transform_map(
    definition: &ComponentDefinition,
    instances: &[ComponentInstance],
    global: &TransformerOptions,
) -> IndexMap<String, String> {
    let mut map = IndexMap::new();
    for instance in instances {
        for record in component_tokens(definition, instance, global, false) {
            map.insert(record.segments.join("-"), record.value);
        }
    }
    map
}
