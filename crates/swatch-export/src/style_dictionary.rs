//! Nested style-dictionary JSON output.

use serde_json::{json, Map, Value};

use swatch_core::{ComponentDefinition, ComponentInstance, TransformerOptions};

use crate::transformer::{camel_case, component_tokens};

/// Render a definition's instances as a nested style-dictionary tree:
/// segments become the object path, the leaf (property) segment is
/// camel-cased, and leaf values are wrapped as `{ "value": ... }`.
pub fn transform_style_dictionary(
    definition: &ComponentDefinition,
    instances: &[ComponentInstance],
    global: &TransformerOptions,
) -> Value {
    let mut root = Map::new();
    for instance in instances {
        for record in component_tokens(definition, instance, global, false) {
            insert_path(&mut root, &record.segments, &record.value);
        }
    }
    Value::Object(root)
}

fn insert_path(root: &mut Map<String, Value>, segments: &[String], value: &str) {
    let Some((leaf, parents)) = segments.split_last() else {
        return;
    };
    let mut current = root;
    for segment in parents {
        let entry = current
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if !matches!(entry, Value::Object(_)) {
            *entry = Value::Object(Map::new());
        }
        let Value::Object(map) = entry else {
            return;
        };
        current = map;
    }
    current.insert(camel_case(leaf), json!({ "value": value }));
}
