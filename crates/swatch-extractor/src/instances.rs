//! Component-instance extraction orchestration.
//!
//! One call processes all raw components of a single definition:
//! variant parsing, effective-root resolution, per-part extraction, shared
//! diversion, expansion, deduplication. Extraction of each raw component is
//! independent; expansion and dedup run once the full collection is known.

use indexmap::IndexMap;
use tracing::{debug, warn};

use swatch_core::{
    ComponentDefinition, ComponentInstance, DesignNode, Exportable, ExtractError, NodeType,
    RawComponent, TokenSet, TransformerOptions, VariantPropertyMap,
};
use swatch_expander::{dedupe_by_id, expand_shared_variants, SharedVariantSource};
use swatch_parser::{parse_selector, parse_variant_properties, resolve_selector};

use crate::tokens::extract_token_set;

/// Extract every component instance a definition yields from its raw
/// components.
///
/// The only fatal condition is a legacy fallback that finds no
/// `INSTANCE`-typed descendant; it aborts this definition's extraction.
/// Rule-level configuration problems are logged and skipped, and selector
/// misses yield no data for the rule.
pub fn extract_component_instances(
    components: &[RawComponent],
    definition: &ComponentDefinition,
    legacy: Option<&ComponentDefinition>,
    global: &TransformerOptions,
) -> Result<Vec<ComponentInstance>, ExtractError> {
    if definition.parts.is_empty() {
        debug!(definition = %definition.id, "definition declares no parts, yielding no instances");
        return Ok(Vec::new());
    }

    let options = definition.options.transformer.overlaid_on(global);
    let recognized: Vec<&str> = definition
        .options
        .exporter
        .variant_properties
        .declared()
        .map(|s| s.as_str())
        .collect();
    let shared_rules = &definition.options.exporter.shared_variants;

    let mut ordinary = Vec::new();
    let mut shared_pool = Vec::new();

    for component in components {
        let variants =
            parse_variant_properties(&component.node.name, recognized.iter().copied());
        let root = effective_root(&component.node, &variants, legacy)?;

        let instance = ComponentInstance {
            id: variants.id(),
            name: definition.name.clone(),
            description: component.metadata.description.clone(),
            parts: extract_parts(root, &variants, definition),
            variant_properties: variants,
            definition_id: definition.id.clone(),
        };

        // Shared-variant sources feed expansion instead of the output.
        if shared_rules
            .iter()
            .any(|rule| rule.component_id == component.metadata.id)
        {
            shared_pool.push(SharedVariantSource {
                component_id: component.metadata.id.clone(),
                instance,
            });
        } else {
            ordinary.push(instance);
        }
    }

    let expanded =
        expand_shared_variants(ordinary, &shared_pool, shared_rules, &options.defaults);
    Ok(dedupe_by_id(expanded))
}

/// One definition's worth of extraction input.
pub struct ExtractionJob<'a> {
    pub definition: &'a ComponentDefinition,
    pub legacy: Option<&'a ComponentDefinition>,
    pub components: &'a [RawComponent],
}

/// Run extraction for several definitions, isolating failures.
///
/// A definition that hits the fatal root-resolution error is reported and
/// skipped; the remaining definitions still extract.
pub fn extract_all<'a>(
    jobs: impl IntoIterator<Item = ExtractionJob<'a>>,
    global: &TransformerOptions,
) -> (Vec<ComponentInstance>, Vec<ExtractError>) {
    let mut instances = Vec::new();
    let mut errors = Vec::new();
    for job in jobs {
        match extract_component_instances(job.components, job.definition, job.legacy, global) {
            Ok(mut extracted) => instances.append(&mut extracted),
            Err(err) => {
                tracing::error!(definition = %job.definition.id, error = %err, "definition extraction failed");
                errors.push(err);
            }
        }
    }
    (instances, errors)
}

/// Resolve the node extraction starts from.
///
/// Normally the component node itself. Under a legacy definition that
/// declares layout variant properties, an instance carrying none of them
/// descends to its first `INSTANCE`-typed descendant; a component without
/// one cannot be extracted.
fn effective_root<'a>(
    node: &'a DesignNode,
    variants: &VariantPropertyMap,
    legacy: Option<&ComponentDefinition>,
) -> Result<&'a DesignNode, ExtractError> {
    let Some(legacy) = legacy else {
        return Ok(node);
    };
    let layout = &legacy.options.exporter.variant_properties.layout;
    if layout.is_empty() || layout.iter().any(|prop| variants.contains(prop)) {
        return Ok(node);
    }
    node.descendants()
        .find(|n| n.node_type == NodeType::Instance)
        .ok_or_else(|| ExtractError::MissingRootInstance {
            component: node.name.clone(),
        })
}

/// Run every part's export rules, merging same-kind token sets so each
/// part holds at most one record per kind.
fn extract_parts(
    root: &DesignNode,
    variants: &VariantPropertyMap,
    definition: &ComponentDefinition,
) -> IndexMap<String, Vec<TokenSet>> {
    let mut parts = IndexMap::new();
    for part in &definition.parts {
        let mut sets: Vec<TokenSet> = Vec::new();
        for rule in &part.tokens {
            if rule.from.is_empty() || rule.export.is_empty() {
                warn!(part = %part.id, "export rule missing 'from' or 'export', skipping");
                continue;
            }
            let path = match parse_selector(&rule.from) {
                Ok(path) => path,
                Err(err) => {
                    warn!(part = %part.id, selector = %rule.from, error = %err, "skipping unparseable selector");
                    continue;
                }
            };
            let Some(node) = resolve_selector(root, &path, variants) else {
                continue;
            };
            for kind in &rule.export {
                let Some(exportable) = Exportable::parse(kind) else {
                    warn!(part = %part.id, kind = %kind, "unrecognized exportable kind, skipping");
                    continue;
                };
                merge_into(&mut sets, extract_token_set(node, exportable));
            }
        }
        parts.insert(part.id.clone(), sets);
    }
    parts
}

fn merge_into(sets: &mut Vec<TokenSet>, later: TokenSet) {
    match sets
        .iter_mut()
        .find(|set| set.exportable() == later.exportable())
    {
        Some(existing) => *existing = existing.merged_with(&later),
        None => sets.push(later),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_core::{
        ComponentMetadata, DefinitionOptions, ExportRule, ExporterOptions, Paint, PartDefinition,
        Rgba, SharedVariantRule, VariantPropertySchema,
    };

    fn button_definition() -> ComponentDefinition {
        ComponentDefinition {
            id: "button".to_string(),
            name: "Button".to_string(),
            parts: vec![PartDefinition {
                id: "$".to_string(),
                tokens: vec![ExportRule {
                    from: "$".to_string(),
                    export: vec!["BACKGROUND".to_string(), "OPACITY".to_string()],
                }],
            }],
            options: DefinitionOptions {
                exporter: ExporterOptions {
                    variant_properties: VariantPropertySchema {
                        design: vec![
                            "Theme".to_string(),
                            "Type".to_string(),
                            "State".to_string(),
                        ],
                        layout: vec![],
                    },
                    shared_variants: vec![],
                },
                transformer: TransformerOptions::default(),
            },
        }
    }

    fn make_component(name: &str, metadata_id: &str) -> RawComponent {
        let mut node = DesignNode::new("1:0", name, NodeType::Component);
        node.fills = vec![Paint::solid(Rgba::rgb(0.0, 0.0, 1.0))];
        node.opacity = Some(0.8);
        RawComponent {
            node,
            metadata: ComponentMetadata {
                id: metadata_id.to_string(),
                name: name.to_string(),
                description: "A button".to_string(),
            },
        }
    }

    #[test]
    fn test_basic_extraction() {
        let components = vec![make_component("Theme=light, Type=primary", "set:1")];
        let definition = button_definition();

        let instances = extract_component_instances(
            &components,
            &definition,
            None,
            &TransformerOptions::default(),
        )
        .unwrap();

        assert_eq!(instances.len(), 1);
        let instance = &instances[0];
        assert_eq!(instance.id, "Theme-light-Type-primary");
        assert_eq!(instance.name, "Button");
        assert_eq!(instance.description, "A button");
        assert_eq!(instance.definition_id, "button");

        let sets = instance.parts.get("$").unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].exportable(), Exportable::Background);
        assert_eq!(sets[1].exportable(), Exportable::Opacity);
    }

    #[test]
    fn test_zero_parts_yields_zero_instances() {
        let components = vec![make_component("Theme=light", "set:1")];
        let mut definition = button_definition();
        definition.parts.clear();

        let instances = extract_component_instances(
            &components,
            &definition,
            None,
            &TransformerOptions::default(),
        )
        .unwrap();
        assert!(instances.is_empty());
    }

    #[test]
    fn test_misconfigured_rules_are_skipped() {
        let components = vec![make_component("Theme=light", "set:1")];
        let mut definition = button_definition();
        definition.parts[0].tokens = vec![
            ExportRule {
                from: String::new(),
                export: vec!["FILL".to_string()],
            },
            ExportRule {
                from: "$".to_string(),
                export: vec!["SHADOW".to_string()],
            },
            ExportRule {
                from: "FRAME[name='unterminated".to_string(),
                export: vec!["FILL".to_string()],
            },
        ];

        let instances = extract_component_instances(
            &components,
            &definition,
            None,
            &TransformerOptions::default(),
        )
        .unwrap();
        // The instance still extracts; no rule yielded data.
        assert_eq!(instances.len(), 1);
        assert!(instances[0].parts.get("$").unwrap().is_empty());
    }

    #[test]
    fn test_resolution_miss_yields_no_data() {
        let components = vec![make_component("Theme=light", "set:1")];
        let mut definition = button_definition();
        definition.parts[0].tokens[0].from = "RECTANGLE[name='Nope']".to_string();

        let instances = extract_component_instances(
            &components,
            &definition,
            None,
            &TransformerOptions::default(),
        )
        .unwrap();
        assert!(instances[0].parts.get("$").unwrap().is_empty());
    }

    #[test]
    fn test_same_kind_records_merge_to_one() {
        let mut component = make_component("Theme=light", "set:1");
        let mut inner = DesignNode::new("1:5", "Body", NodeType::Frame);
        inner.opacity = Some(0.25);
        component.node.children.push(inner);

        let mut definition = button_definition();
        definition.parts[0].tokens = vec![
            ExportRule {
                from: "$".to_string(),
                export: vec!["OPACITY".to_string()],
            },
            ExportRule {
                from: "FRAME[name='Body']".to_string(),
                export: vec!["OPACITY".to_string()],
            },
        ];

        let instances = extract_component_instances(
            &components_of(component),
            &definition,
            None,
            &TransformerOptions::default(),
        )
        .unwrap();
        let sets = instances[0].parts.get("$").unwrap();
        assert_eq!(sets.len(), 1);
        // The later, more specific rule refined the earlier record.
        assert_eq!(sets[0], TokenSet::Opacity { opacity: Some(0.25) });
    }

    fn components_of(component: RawComponent) -> Vec<RawComponent> {
        vec![component]
    }

    #[test]
    fn test_duplicate_variant_ids_keep_first() {
        let first = make_component("Theme=light", "set:1");
        let mut second = make_component("Theme=light", "set:1");
        second.node.opacity = Some(0.1);

        let instances = extract_component_instances(
            &[first, second],
            &button_definition(),
            None,
            &TransformerOptions::default(),
        )
        .unwrap();
        assert_eq!(instances.len(), 1);
        let sets = instances[0].parts.get("$").unwrap();
        assert_eq!(sets[1], TokenSet::Opacity { opacity: Some(0.8) });
    }

    #[test]
    fn test_legacy_fallback_descends_to_instance_node() {
        let mut component = make_component("Theme=light", "set:1");
        let mut inner = DesignNode::new("1:9", "Inner", NodeType::Instance);
        inner.opacity = Some(0.3);
        inner.fills = vec![Paint::solid(Rgba::rgb(1.0, 0.0, 0.0))];
        component.node.children.push(inner);

        let mut legacy = button_definition();
        legacy.options.exporter.variant_properties.layout = vec!["Size".to_string()];

        let instances = extract_component_instances(
            &components_of(component),
            &button_definition(),
            Some(&legacy),
            &TransformerOptions::default(),
        )
        .unwrap();
        let sets = instances[0].parts.get("$").unwrap();
        // Tokens come from the INSTANCE child, not the component node.
        assert_eq!(sets[1], TokenSet::Opacity { opacity: Some(0.3) });
    }

    #[test]
    fn test_legacy_fallback_without_instance_is_fatal() {
        let component = make_component("Theme=light", "set:1");
        let mut legacy = button_definition();
        legacy.options.exporter.variant_properties.layout = vec!["Size".to_string()];

        let result = extract_component_instances(
            &components_of(component),
            &button_definition(),
            Some(&legacy),
            &TransformerOptions::default(),
        );
        assert_eq!(
            result,
            Err(ExtractError::MissingRootInstance {
                component: "Theme=light".to_string(),
            })
        );
    }

    #[test]
    fn test_legacy_fallback_skipped_when_layout_prop_present() {
        let mut component = make_component("Theme=light, Size=large", "set:1");
        component.node.opacity = Some(0.8);

        let mut legacy = button_definition();
        legacy.options.exporter.variant_properties.layout = vec!["Size".to_string()];
        let mut definition = button_definition();
        definition
            .options
            .exporter
            .variant_properties
            .layout
            .push("Size".to_string());

        // No INSTANCE child, but the layout property is present so the
        // component node itself is the root.
        let instances = extract_component_instances(
            &components_of(component),
            &definition,
            Some(&legacy),
            &TransformerOptions::default(),
        )
        .unwrap();
        assert_eq!(instances.len(), 1);
    }

    #[test]
    fn test_shared_source_is_diverted_and_expanded() {
        let mut definition = button_definition();
        definition.options.exporter.shared_variants = vec![SharedVariantRule {
            component_id: "shared:states".to_string(),
            shared_variant_property: "State".to_string(),
            distinctive_variant_properties: vec!["Type".to_string()],
        }];
        definition
            .options
            .transformer
            .defaults
            .insert("State".to_string(), "default".to_string());

        let components = vec![
            make_component("Type=primary, State=default", "set:1"),
            make_component("Type=primary, State=hover", "shared:states"),
            make_component("Type=primary, State=focus", "shared:states"),
        ];

        let instances = extract_component_instances(
            &components,
            &definition,
            None,
            &TransformerOptions::default(),
        )
        .unwrap();

        let ids: Vec<&str> = instances.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "Type-primary-State-default",
                "Type-primary-State-hover",
                "Type-primary-State-focus",
            ]
        );
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let components = vec![
            make_component("Theme=light, Type=primary", "set:1"),
            make_component("Theme=dark, Type=primary", "set:1"),
        ];
        let definition = button_definition();

        let first = extract_component_instances(
            &components,
            &definition,
            None,
            &TransformerOptions::default(),
        )
        .unwrap();
        let second = extract_component_instances(
            &components,
            &definition,
            None,
            &TransformerOptions::default(),
        )
        .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_all_isolates_failed_definitions() {
        let good = button_definition();
        let mut bad = button_definition();
        bad.id = "legacy-button".to_string();
        let mut legacy = button_definition();
        legacy.options.exporter.variant_properties.layout = vec!["Size".to_string()];

        let components = vec![make_component("Theme=light", "set:1")];
        let jobs = vec![
            ExtractionJob {
                definition: &bad,
                legacy: Some(&legacy),
                components: &components,
            },
            ExtractionJob {
                definition: &good,
                legacy: None,
                components: &components,
            },
        ];

        let (instances, errors) = extract_all(jobs, &TransformerOptions::default());
        assert_eq!(instances.len(), 1);
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0],
            ExtractError::MissingRootInstance { .. }
        ));
    }
}
