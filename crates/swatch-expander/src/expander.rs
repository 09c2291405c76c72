//! Shared-variant expansion logic.
//!
//! Expansion is a whole-collection barrier: it needs the complete ordinary
//! instance list and the complete shared pool before it can run.

use std::collections::{HashMap, HashSet};

use swatch_core::{ComponentInstance, SharedVariantRule};

/// An instance extracted from a shared-variant source component, diverted
/// out of the ordinary instance list and keyed by the authored component id
/// its rule matches on.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedVariantSource {
    pub component_id: String,
    pub instance: ComponentInstance,
}

/// Expand ordinary instances with clones from the shared pool.
///
/// For every (instance, rule) pair, the instance receives one clone per
/// matching pool source when:
/// - the instance's value for the rule's shared property equals the
///   configured default for that property (only "default" instances are
///   eligible), and
/// - every distinctive property has the same value on the instance and the
///   source.
///
/// A clone carries the ordinary instance's variant map with the shared
/// property overwritten to the source's value, the source's parts, and a
/// regenerated id. Output order is each original instance followed by its
/// clones in (rule × source) order.
pub fn expand_shared_variants(
    instances: Vec<ComponentInstance>,
    sources: &[SharedVariantSource],
    rules: &[SharedVariantRule],
    defaults: &HashMap<String, String>,
) -> Vec<ComponentInstance> {
    let mut result = Vec::with_capacity(instances.len());

    for instance in instances {
        let mut clones = Vec::new();
        for rule in rules {
            let Some(default) = defaults.get(&rule.shared_variant_property) else {
                continue;
            };
            if instance.variant_properties.get(&rule.shared_variant_property)
                != Some(default.as_str())
            {
                continue;
            }

            for source in sources.iter().filter(|s| s.component_id == rule.component_id) {
                let Some(shared_value) = source
                    .instance
                    .variant_properties
                    .get(&rule.shared_variant_property)
                else {
                    continue;
                };
                let distinctive_match = rule.distinctive_variant_properties.iter().all(|prop| {
                    instance.variant_properties.get(prop)
                        == source.instance.variant_properties.get(prop)
                });
                if !distinctive_match {
                    continue;
                }

                let mut variants = instance.variant_properties.clone();
                variants.insert(rule.shared_variant_property.clone(), shared_value);
                clones.push(ComponentInstance {
                    id: variants.id(),
                    name: instance.name.clone(),
                    description: instance.description.clone(),
                    variant_properties: variants,
                    parts: source.instance.parts.clone(),
                    definition_id: instance.definition_id.clone(),
                });
            }
        }
        result.push(instance);
        result.append(&mut clones);
    }

    result
}

/// Drop instances with an already-seen id, keeping the first occurrence and
/// preserving order.
pub fn dedupe_by_id(instances: Vec<ComponentInstance>) -> Vec<ComponentInstance> {
    let mut seen = HashSet::new();
    instances
        .into_iter()
        .filter(|instance| seen.insert(instance.id.clone()))
        .collect()
}
