//! The name/value transformer shared by all output backends.
//!
//! Converts a component instance's token sets into `(segments, value)`
//! records. Color composition happens here, not during extraction: paint
//! layers are reversed (later-declared layers render on top but compose
//! first-to-last per CSS layering), layer opacity is multiplied through,
//! and a single opaque solid layer renders as hex.

use swatch_core::{
    ComponentDefinition, ComponentInstance, Effect, EffectType, Exportable, Paint, PaintType,
    Rgba, TextAlignHorizontal, TextCase, TextDecoration, TokenSet, TransformerOptions,
};

/// A finished variable for one backend; `name` carries the backend prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedVariable {
    pub name: String,
    pub value: String,
    pub metadata: VariableMetadata,
}

/// Where a variable came from.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableMetadata {
    pub part: String,
    pub exportable: Exportable,
    pub property: String,
    /// Parallel blend-mode list for composed multi-layer colors.
    pub blend: Option<String>,
}

/// A backend-neutral token record: finished name segments plus the value.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRecord {
    pub segments: Vec<String>,
    pub value: String,
    pub metadata: VariableMetadata,
}

/// Produce one token record per (part, token set, derived property) of an
/// instance.
///
/// `keep_defaults` suppresses default elision; callers use it when naming
/// the canonical record of a component.
pub fn component_tokens(
    definition: &ComponentDefinition,
    instance: &ComponentInstance,
    global: &TransformerOptions,
    keep_defaults: bool,
) -> Vec<TokenRecord> {
    let options = definition.options.transformer.overlaid_on(global);
    let mut records = Vec::new();
    for (part_id, sets) in &instance.parts {
        for set in sets {
            for entry in token_entries(set) {
                let segments = build_segments(
                    definition,
                    instance,
                    part_id,
                    entry.property,
                    &options,
                    keep_defaults,
                );
                records.push(TokenRecord {
                    segments,
                    value: entry.value,
                    metadata: VariableMetadata {
                        part: part_id.clone(),
                        exportable: set.exportable(),
                        property: entry.property.to_string(),
                        blend: entry.blend,
                    },
                });
            }
        }
    }
    records
}

struct Entry {
    property: &'static str,
    value: String,
    blend: Option<String>,
}

impl Entry {
    fn plain(property: &'static str, value: String) -> Self {
        Self {
            property,
            value,
            blend: None,
        }
    }
}

/// Derive the property/value pairs a token set contributes.
///
/// Records whose composed value would be empty (a paint list with no
/// visible solid layer, an effect list with no shadow) are not emitted.
fn token_entries(set: &TokenSet) -> Vec<Entry> {
    let mut entries = Vec::new();
    match set {
        TokenSet::Background { background } => {
            if let Some((value, blend)) = background.as_deref().and_then(compose_paints) {
                entries.push(Entry {
                    property: "background",
                    value,
                    blend: Some(blend),
                });
            }
        }
        TokenSet::Fill { color } => {
            if let Some((value, blend)) = color.as_deref().and_then(compose_paints) {
                entries.push(Entry {
                    property: "color",
                    value,
                    blend: Some(blend),
                });
            }
        }
        TokenSet::Border {
            weight,
            radius,
            dashes,
            strokes,
        } => {
            if let Some(weight) = weight {
                entries.push(Entry::plain("border-width", pixels(*weight)));
            }
            if let Some(radius) = radius {
                entries.push(Entry::plain("border-radius", pixels(*radius)));
            }
            if let Some(dashes) = dashes {
                let style = if dashes.iter().any(|d| *d > 0.0) {
                    "dashed"
                } else {
                    "solid"
                };
                entries.push(Entry::plain("border-style", style.to_string()));
            }
            if let Some((value, blend)) = strokes.as_deref().and_then(compose_paints) {
                entries.push(Entry {
                    property: "border-color",
                    value,
                    blend: Some(blend),
                });
            }
        }
        TokenSet::Spacing { padding, spacing } => {
            if let Some(padding) = padding {
                entries.push(Entry::plain("padding-top", pixels(padding.top)));
                entries.push(Entry::plain("padding-right", pixels(padding.right)));
                entries.push(Entry::plain("padding-bottom", pixels(padding.bottom)));
                entries.push(Entry::plain("padding-left", pixels(padding.left)));
            }
            if let Some(spacing) = spacing {
                entries.push(Entry::plain("spacing", pixels(*spacing)));
            }
        }
        TokenSet::Typography {
            font_family,
            font_size,
            font_weight,
            line_height_percent,
            letter_spacing,
            text_align_horizontal,
            text_decoration,
            text_case,
            ..
        } => {
            if let Some(family) = font_family.as_deref().filter(|f| !f.is_empty()) {
                entries.push(Entry::plain("font-family", format!("'{family}'")));
            }
            if let Some(size) = font_size {
                entries.push(Entry::plain("font-size", pixels(*size)));
            }
            if let Some(weight) = font_weight {
                entries.push(Entry::plain("font-weight", format_number(*weight)));
            }
            if let Some(percent) = line_height_percent {
                entries.push(Entry::plain("line-height", format_number(percent / 100.0)));
            }
            if let Some(spacing) = letter_spacing {
                entries.push(Entry::plain("letter-spacing", pixels(*spacing)));
            }
            if let Some(align) = text_align_horizontal {
                entries.push(Entry::plain("text-align", align_css(*align).to_string()));
            }
            if let Some(decoration) = text_decoration {
                entries.push(Entry::plain(
                    "text-decoration",
                    decoration_css(*decoration).to_string(),
                ));
            }
            if let Some(case) = text_case {
                entries.push(Entry::plain("text-transform", case_css(*case).to_string()));
            }
        }
        TokenSet::Effect { effect } => {
            if let Some(value) = effect.as_deref().and_then(compose_shadows) {
                entries.push(Entry::plain("box-shadow", value));
            }
        }
        TokenSet::Opacity { opacity } => {
            if let Some(opacity) = opacity {
                entries.push(Entry::plain("opacity", format_number(*opacity)));
            }
        }
        TokenSet::Size { width, height } => {
            if let Some(width) = width {
                entries.push(Entry::plain("width", pixels(*width)));
            }
            if let Some(height) = height {
                entries.push(Entry::plain("height", pixels(*height)));
            }
        }
    }
    entries
}

fn align_css(align: TextAlignHorizontal) -> &'static str {
    match align {
        TextAlignHorizontal::Left => "left",
        TextAlignHorizontal::Right => "right",
        TextAlignHorizontal::Center => "center",
        TextAlignHorizontal::Justified => "justify",
    }
}

fn decoration_css(decoration: TextDecoration) -> &'static str {
    match decoration {
        TextDecoration::None => "none",
        TextDecoration::Underline => "underline",
        TextDecoration::Strikethrough => "line-through",
    }
}

fn case_css(case: TextCase) -> &'static str {
    match case {
        TextCase::Upper => "uppercase",
        TextCase::Lower => "lowercase",
        TextCase::Title => "capitalize",
        TextCase::Original | TextCase::SmallCaps | TextCase::SmallCapsForced => "none",
    }
}

/// Compose a paint list into a CSS color value and its parallel blend list.
///
/// Layers are reversed, invisible and non-solid layers dropped, layer
/// opacity multiplied into the color alpha. A single opaque layer renders
/// as lowercase hex; anything else as comma-joined `rgba(...)` values.
fn compose_paints(paints: &[Paint]) -> Option<(String, String)> {
    let layers: Vec<&Paint> = paints
        .iter()
        .rev()
        .filter(|p| p.is_visible() && p.paint_type == PaintType::Solid && p.color.is_some())
        .collect();
    let first = *layers.first()?;

    if layers.len() == 1 {
        let color = first.color?;
        if color.a * first.opacity.unwrap_or(1.0) >= 1.0 {
            let (r, g, b, _) = color.to_rgba8();
            return Some((format!("#{r:02x}{g:02x}{b:02x}"), blend_of(first)));
        }
    }

    let value = layers
        .iter()
        .map(|p| layer_rgba(p))
        .collect::<Vec<_>>()
        .join(", ");
    let blend = layers
        .iter()
        .map(|p| blend_of(p))
        .collect::<Vec<_>>()
        .join(", ");
    Some((value, blend))
}

fn layer_rgba(paint: &Paint) -> String {
    let color = paint.color.unwrap_or_default();
    let (r, g, b, _) = color.to_rgba8();
    let alpha = (color.a * paint.opacity.unwrap_or(1.0)).clamp(0.0, 1.0);
    format!("rgba({r}, {g}, {b}, {})", format_number(alpha))
}

fn blend_of(paint: &Paint) -> String {
    paint
        .blend_mode
        .as_deref()
        .unwrap_or("NORMAL")
        .to_ascii_lowercase()
        .replace('_', "-")
}

/// Compose visible drop/inner shadows into a `box-shadow` value; blur
/// effects don't contribute.
fn compose_shadows(effects: &[Effect]) -> Option<String> {
    let shadows: Vec<String> = effects
        .iter()
        .filter(|e| e.is_visible())
        .filter_map(|effect| {
            let inset = match effect.effect_type {
                EffectType::DropShadow => "",
                EffectType::InnerShadow => "inset ",
                EffectType::LayerBlur | EffectType::BackgroundBlur => return None,
            };
            let offset = effect.offset.unwrap_or_default();
            let color = effect.color.unwrap_or(Rgba::rgb(0.0, 0.0, 0.0));
            let (r, g, b, _) = color.to_rgba8();
            let mut shadow = format!(
                "{inset}{}px {}px {}px",
                format_number(offset.x),
                format_number(offset.y),
                format_number(effect.radius.unwrap_or(0.0)),
            );
            if let Some(spread) = effect.spread {
                shadow.push_str(&format!(" {}px", format_number(spread)));
            }
            shadow.push_str(&format!(
                " rgba({r}, {g}, {b}, {})",
                format_number(color.a)
            ));
            Some(shadow)
        })
        .collect();
    if shadows.is_empty() {
        None
    } else {
        Some(shadows.join(", "))
    }
}

/// Assemble the name segments for one property of one instance.
fn build_segments(
    definition: &ComponentDefinition,
    instance: &ComponentInstance,
    part: &str,
    property: &str,
    options: &TransformerOptions,
    keep_defaults: bool,
) -> Vec<String> {
    // Replacement first, then elision against the replaced value.
    let variant_value = |prop: &str| -> Option<String> {
        let raw = instance.variant_properties.get(prop)?;
        let replaced = options
            .replace
            .get(prop)
            .and_then(|table| table.get(raw))
            .cloned()
            .unwrap_or_else(|| raw.to_string());
        if !keep_defaults && options.defaults.get(prop).is_some_and(|d| *d == replaced) {
            return Some(String::new());
        }
        Some(replaced)
    };

    let segments: Vec<String> = match &options.token_name_segments {
        Some(templates) => templates
            .iter()
            .map(|template| {
                hyphenate(&resolve_template(
                    template,
                    instance,
                    part,
                    property,
                    &variant_value,
                ))
            })
            .collect(),
        None => {
            let mut segments = vec![hyphenate(&instance.name), part_segment(part)];
            for prop in definition.options.exporter.variant_properties.declared() {
                segments.push(
                    variant_value(prop)
                        .map(|v| hyphenate(&v))
                        .unwrap_or_default(),
                );
            }
            segments.push(property.to_string());
            segments
        }
    };

    segments.into_iter().filter(|s| !s.is_empty()).collect()
}

/// Resolve one segment template: `{Component}`, `{Part}`, `{Property}`,
/// `{Variant.<Name>}`. Unknown placeholders resolve to the empty string;
/// literal text is kept.
fn resolve_template<F>(
    template: &str,
    instance: &ComponentInstance,
    part: &str,
    property: &str,
    variant_value: &F,
) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push('{');
            rest = after;
            continue;
        };
        let token = after[..close].trim();
        let resolved = if token.eq_ignore_ascii_case("component") {
            hyphenate(&instance.name)
        } else if token.eq_ignore_ascii_case("part") {
            part_segment(part)
        } else if token.eq_ignore_ascii_case("property") {
            property.to_string()
        } else if let Some(prop) = token
            .strip_prefix("Variant.")
            .or_else(|| token.strip_prefix("variant."))
        {
            variant_value(prop.trim()).unwrap_or_default()
        } else {
            String::new()
        };
        out.push_str(&resolved);
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

/// The `$` part names the component root and contributes no segment.
fn part_segment(part: &str) -> String {
    if part == "$" {
        String::new()
    } else {
        hyphenate(part)
    }
}

/// Hyphen-case a name: lowercase, camel boundaries and whitespace and
/// underscore runs become single hyphens, edge hyphens drop.
pub(crate) fn hyphenate(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_lower = false;
    let mut pending_hyphen = false;
    for ch in input.trim().chars() {
        if ch.is_whitespace() || ch == '_' || ch == '-' {
            pending_hyphen = true;
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower {
            pending_hyphen = true;
        }
        if pending_hyphen && !out.is_empty() {
            out.push('-');
        }
        pending_hyphen = false;
        out.extend(ch.to_lowercase());
        prev_lower = ch.is_lowercase() || ch.is_numeric();
    }
    out
}

/// Camel-case a hyphenated name (`border-width` → `borderWidth`).
pub(crate) fn camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut upper_next = false;
    for ch in input.chars() {
        if ch == '-' {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Format a pixel or ratio value: integers bare, otherwise rounded to two
/// decimals with trailing zeros stripped and the leading `0` dropped below
/// magnitude one (`0.5` → `.5`, `-0.25` → `-.25`).
pub(crate) fn format_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == rounded.trunc() {
        return format!("{}", rounded as i64);
    }
    let mut s = format!("{rounded:.2}");
    while s.ends_with('0') {
        s.pop();
    }
    if let Some(stripped) = s.strip_prefix("0.") {
        format!(".{stripped}")
    } else if let Some(stripped) = s.strip_prefix("-0.") {
        format!("-.{stripped}")
    } else {
        s
    }
}

pub(crate) fn pixels(value: f64) -> String {
    format!("{}px", format_number(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use swatch_core::{
        ComponentInstance, DefinitionOptions, ExporterOptions, VariantPropertyMap,
        VariantPropertySchema,
    };

    fn make_definition() -> ComponentDefinition {
        let mut transformer = TransformerOptions::default();
        transformer.defaults.insert("Theme".into(), "light".into());
        transformer.defaults.insert("State".into(), "default".into());
        ComponentDefinition {
            id: "button".to_string(),
            name: "Button".to_string(),
            parts: vec![],
            options: DefinitionOptions {
                exporter: ExporterOptions {
                    variant_properties: VariantPropertySchema {
                        design: vec!["Theme".into(), "Type".into(), "State".into()],
                        layout: vec![],
                    },
                    shared_variants: vec![],
                },
                transformer,
            },
        }
    }

    fn make_instance(pairs: &[(&str, &str)], sets: Vec<TokenSet>) -> ComponentInstance {
        let variants: VariantPropertyMap = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut parts = IndexMap::new();
        parts.insert("$".to_string(), sets);
        ComponentInstance {
            id: variants.id(),
            name: "Button".to_string(),
            description: String::new(),
            variant_properties: variants,
            parts,
            definition_id: "button".to_string(),
        }
    }

    fn fill_set(color: Rgba) -> TokenSet {
        TokenSet::Fill {
            color: Some(vec![Paint::solid(color)]),
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.5), ".5");
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(-0.3333), "-.33");
        assert_eq!(format_number(16.0), "16");
        assert_eq!(format_number(1.25), "1.25");
        assert_eq!(format_number(1.204), "1.2");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_hyphenate() {
        assert_eq!(hyphenate("Button"), "button");
        assert_eq!(hyphenate("Focus Ring"), "focus-ring");
        assert_eq!(hyphenate("iconWrapper"), "icon-wrapper");
        assert_eq!(hyphenate("border-width"), "border-width");
        assert_eq!(hyphenate("  spaced_out  "), "spaced-out");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("border-width"), "borderWidth");
        assert_eq!(camel_case("background"), "background");
    }

    #[test]
    fn test_single_opaque_solid_is_hex() {
        let (value, blend) =
            compose_paints(&[Paint::solid(Rgba::rgb(0.0, 0.0, 1.0))]).unwrap();
        assert_eq!(value, "#0000ff");
        assert_eq!(blend, "normal");
    }

    #[test]
    fn test_translucent_solid_is_rgba() {
        let (value, _) =
            compose_paints(&[Paint::solid(Rgba::rgba(1.0, 0.0, 0.0, 0.5))]).unwrap();
        assert_eq!(value, "rgba(255, 0, 0, .5)");
    }

    #[test]
    fn test_layer_opacity_multiplies_through() {
        let paint = Paint {
            opacity: Some(0.5),
            ..Paint::solid(Rgba::rgb(1.0, 1.0, 1.0))
        };
        let (value, _) = compose_paints(&[paint]).unwrap();
        assert_eq!(value, "rgba(255, 255, 255, .5)");
    }

    #[test]
    fn test_multi_layer_reversed_with_blend_list() {
        let bottom = Paint {
            blend_mode: Some("NORMAL".to_string()),
            ..Paint::solid(Rgba::rgb(0.0, 0.0, 0.0))
        };
        let top = Paint {
            blend_mode: Some("MULTIPLY".to_string()),
            ..Paint::solid(Rgba::rgba(1.0, 1.0, 1.0, 0.4))
        };
        let (value, blend) = compose_paints(&[bottom, top]).unwrap();
        // Later-declared layer composes first.
        assert_eq!(value, "rgba(255, 255, 255, .4), rgba(0, 0, 0, 1)");
        assert_eq!(blend, "multiply, normal");
    }

    #[test]
    fn test_invisible_and_gradient_layers_drop() {
        let hidden = Paint {
            visible: Some(false),
            ..Paint::solid(Rgba::rgb(1.0, 0.0, 0.0))
        };
        let gradient = Paint {
            paint_type: PaintType::GradientLinear,
            ..Paint::default()
        };
        assert!(compose_paints(&[hidden, gradient]).is_none());
    }

    #[test]
    fn test_shadow_composition() {
        let effects = [
            Effect {
                effect_type: EffectType::DropShadow,
                visible: None,
                color: Some(Rgba::rgba(0.0, 0.0, 0.0, 0.25)),
                offset: Some(swatch_core::Vector2 { x: 0.0, y: 4.0 }),
                radius: Some(8.0),
                spread: None,
            },
            Effect {
                effect_type: EffectType::LayerBlur,
                visible: None,
                color: None,
                offset: None,
                radius: Some(2.0),
                spread: None,
            },
        ];
        assert_eq!(
            compose_shadows(&effects).unwrap(),
            "0px 4px 8px rgba(0, 0, 0, .25)"
        );
    }

    #[test]
    fn test_default_variant_values_elide() {
        let definition = make_definition();
        let instance = make_instance(
            &[("Theme", "light"), ("Type", "primary"), ("State", "default")],
            vec![fill_set(Rgba::rgb(0.0, 0.0, 1.0))],
        );
        let records =
            component_tokens(&definition, &instance, &TransformerOptions::default(), false);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].segments, ["button", "primary", "color"]);
        assert!(!records[0].segments.join("-").contains("light"));
    }

    #[test]
    fn test_non_default_variant_values_kept() {
        let definition = make_definition();
        let instance = make_instance(
            &[("Theme", "dark"), ("Type", "primary"), ("State", "default")],
            vec![fill_set(Rgba::rgb(0.0, 0.0, 1.0))],
        );
        let records =
            component_tokens(&definition, &instance, &TransformerOptions::default(), false);
        assert_eq!(records[0].segments, ["button", "dark", "primary", "color"]);
    }

    #[test]
    fn test_keep_defaults_suppresses_elision() {
        let definition = make_definition();
        let instance = make_instance(
            &[("Theme", "light"), ("Type", "primary"), ("State", "default")],
            vec![fill_set(Rgba::rgb(0.0, 0.0, 1.0))],
        );
        let records =
            component_tokens(&definition, &instance, &TransformerOptions::default(), true);
        assert_eq!(
            records[0].segments,
            ["button", "light", "primary", "default", "color"]
        );
    }

    #[test]
    fn test_replacement_applies_before_elision() {
        let mut definition = make_definition();
        definition
            .options
            .transformer
            .replace
            .entry("Type".into())
            .or_default()
            .insert("primary".into(), "main".into());
        let instance = make_instance(
            &[("Theme", "light"), ("Type", "primary"), ("State", "default")],
            vec![fill_set(Rgba::rgb(0.0, 0.0, 1.0))],
        );
        let records =
            component_tokens(&definition, &instance, &TransformerOptions::default(), false);
        assert_eq!(records[0].segments, ["button", "main", "color"]);
    }

    #[test]
    fn test_empty_replacement_elides_segment() {
        let mut definition = make_definition();
        definition
            .options
            .transformer
            .replace
            .entry("Type".into())
            .or_default()
            .insert("primary".into(), String::new());
        let instance = make_instance(
            &[("Theme", "light"), ("Type", "primary")],
            vec![fill_set(Rgba::rgb(0.0, 0.0, 1.0))],
        );
        let records =
            component_tokens(&definition, &instance, &TransformerOptions::default(), false);
        assert_eq!(records[0].segments, ["button", "color"]);
    }

    #[test]
    fn test_segment_templates() {
        let mut definition = make_definition();
        definition.options.transformer.token_name_segments = Some(vec![
            "{Component}".to_string(),
            "tokens".to_string(),
            "{Variant.Theme}".to_string(),
            "{Part}".to_string(),
            "{Property}".to_string(),
        ]);
        let instance = make_instance(
            &[("Theme", "dark"), ("Type", "primary")],
            vec![fill_set(Rgba::rgb(0.0, 0.0, 1.0))],
        );
        let records =
            component_tokens(&definition, &instance, &TransformerOptions::default(), false);
        // `$` part and unresolved segments drop; literals stay.
        assert_eq!(records[0].segments, ["button", "tokens", "dark", "color"]);
    }

    #[test]
    fn test_template_with_unknown_placeholder_drops() {
        let mut definition = make_definition();
        definition.options.transformer.token_name_segments = Some(vec![
            "{Component}".to_string(),
            "{Scope}".to_string(),
            "{Property}".to_string(),
        ]);
        let instance = make_instance(&[], vec![fill_set(Rgba::rgb(0.0, 0.0, 1.0))]);
        let records =
            component_tokens(&definition, &instance, &TransformerOptions::default(), false);
        assert_eq!(records[0].segments, ["button", "color"]);
    }

    #[test]
    fn test_empty_paint_list_emits_nothing() {
        let definition = make_definition();
        let instance = make_instance(&[], vec![TokenSet::Fill { color: Some(vec![]) }]);
        let records =
            component_tokens(&definition, &instance, &TransformerOptions::default(), false);
        assert!(records.is_empty());
    }

    #[test]
    fn test_border_entries() {
        let set = TokenSet::Border {
            weight: Some(2.0),
            radius: Some(6.5),
            dashes: Some(vec![0.0, 0.0]),
            strokes: Some(vec![Paint::solid(Rgba::rgb(0.0, 0.0, 0.0))]),
        };
        let entries = token_entries(&set);
        let pairs: Vec<(&str, &str)> = entries
            .iter()
            .map(|e| (e.property, e.value.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("border-width", "2px"),
                ("border-radius", "6.5px"),
                ("border-style", "solid"),
                ("border-color", "#000000"),
            ]
        );
    }

    #[test]
    fn test_typography_entries() {
        let set = TokenSet::Typography {
            font_family: Some("Inter".to_string()),
            font_size: Some(16.0),
            font_weight: Some(600.0),
            line_height_percent: Some(150.0),
            letter_spacing: Some(0.5),
            text_align_horizontal: Some(TextAlignHorizontal::Center),
            text_align_vertical: None,
            text_decoration: Some(TextDecoration::None),
            text_case: Some(TextCase::Upper),
            characters: Some("Submit".to_string()),
        };
        let entries = token_entries(&set);
        let pairs: Vec<(&str, &str)> = entries
            .iter()
            .map(|e| (e.property, e.value.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("font-family", "'Inter'"),
                ("font-size", "16px"),
                ("font-weight", "600"),
                ("line-height", "1.5"),
                ("letter-spacing", ".5px"),
                ("text-align", "center"),
                ("text-decoration", "none"),
                ("text-transform", "uppercase"),
            ]
        );
    }
}
