//! SCSS variable output.

use swatch_core::{ComponentDefinition, ComponentInstance, TransformerOptions};

use crate::transformer::{component_tokens, NamedVariable};

/// Name an instance's tokens as SCSS variables.
pub fn scss_variables(
    definition: &ComponentDefinition,
    instance: &ComponentInstance,
    global: &TransformerOptions,
) -> Vec<NamedVariable> {
    component_tokens(definition, instance, global, false)
        .into_iter()
        .map(|record| NamedVariable {
            name: format!("${}", record.segments.join("-")),
            value: record.value,
            metadata: record.metadata,
        })
        .collect()
}

/// Render a definition's instances as SCSS variable declarations, one per
/// line.
pub fn transform_scss(
    definition: &ComponentDefinition,
    instances: &[ComponentInstance],
    global: &TransformerOptions,
) -> String {
    let mut scss = String::new();
    for instance in instances {
        for variable in scss_variables(definition, instance, global) {
            scss.push_str(&format!("{}: {};\n", variable.name, variable.value));
        }
    }
    scss
}
