//! CSS custom-property output.

use swatch_core::{ComponentDefinition, ComponentInstance, TransformerOptions};

use crate::transformer::{component_tokens, hyphenate, NamedVariable};

/// Name an instance's tokens as CSS custom properties.
pub fn css_variables(
    definition: &ComponentDefinition,
    instance: &ComponentInstance,
    global: &TransformerOptions,
) -> Vec<NamedVariable> {
    component_tokens(definition, instance, global, false)
        .into_iter()
        .map(|record| NamedVariable {
            name: format!("--{}", record.segments.join("-")),
            value: record.value,
            metadata: record.metadata,
        })
        .collect()
}

/// Render a definition's instances as one CSS block under the configured
/// root class (or the hyphenated component name).
pub fn transform_css(
    definition: &ComponentDefinition,
    instances: &[ComponentInstance],
    global: &TransformerOptions,
) -> String {
    let options = definition.options.transformer.overlaid_on(global);
    let root_class = options
        .css_root_class
        .unwrap_or_else(|| hyphenate(&definition.name));

    let variables: Vec<NamedVariable> = instances
        .iter()
        .flat_map(|instance| css_variables(definition, instance, global))
        .collect();
    if variables.is_empty() {
        return String::new();
    }

    let mut css = format!(".{root_class} {{\n");
    for variable in &variables {
        css.push_str(&format!("  {}: {};\n", variable.name, variable.value));
    }
    css.push_str("}\n");
    css
}
