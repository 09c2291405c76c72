//! Per-exportable token-set extraction.
//!
//! Each function reads only the structurally relevant fields of a resolved
//! node and substitutes a type-appropriate zero value for absent fields, so
//! extraction never fails on missing data. Paint arrays are copied raw;
//! color composition happens later, in the transformer.

use swatch_core::{DesignNode, Exportable, Padding, TokenSet};

/// Extract the token set of the requested kind from a resolved node.
pub fn extract_token_set(node: &DesignNode, exportable: Exportable) -> TokenSet {
    match exportable {
        Exportable::Background => TokenSet::Background {
            background: Some(node.fills.clone()),
        },
        Exportable::Fill => TokenSet::Fill {
            color: Some(node.fills.clone()),
        },
        Exportable::Border => TokenSet::Border {
            weight: Some(node.stroke_weight.unwrap_or(0.0)),
            radius: Some(node.corner_radius.unwrap_or(0.0)),
            dashes: Some(node.stroke_dashes.clone().unwrap_or_else(|| vec![0.0, 0.0])),
            strokes: Some(node.strokes.clone()),
        },
        Exportable::Spacing => TokenSet::Spacing {
            padding: Some(Padding {
                top: node.padding_top.unwrap_or(0.0),
                right: node.padding_right.unwrap_or(0.0),
                bottom: node.padding_bottom.unwrap_or(0.0),
                left: node.padding_left.unwrap_or(0.0),
            }),
            spacing: Some(node.item_spacing.unwrap_or(0.0)),
        },
        Exportable::Typography => {
            let style = node.style.clone().unwrap_or_default();
            TokenSet::Typography {
                font_family: Some(style.font_family.unwrap_or_default()),
                font_size: Some(style.font_size.unwrap_or(0.0)),
                font_weight: Some(style.font_weight.unwrap_or(0.0)),
                line_height_percent: Some(style.line_height_percent_font_size.unwrap_or(0.0)),
                letter_spacing: Some(style.letter_spacing.unwrap_or(0.0)),
                text_align_horizontal: Some(style.text_align_horizontal.unwrap_or_default()),
                text_align_vertical: Some(style.text_align_vertical.unwrap_or_default()),
                text_decoration: Some(style.text_decoration.unwrap_or_default()),
                text_case: Some(style.text_case.unwrap_or_default()),
                characters: Some(node.characters.clone().unwrap_or_default()),
            }
        }
        Exportable::Effect => TokenSet::Effect {
            effect: Some(node.effects.clone()),
        },
        Exportable::Opacity => TokenSet::Opacity {
            // Absent opacity renders fully opaque.
            opacity: Some(node.opacity.unwrap_or(1.0)),
        },
        Exportable::Size => {
            let bbox = node.absolute_bounding_box.unwrap_or_default();
            TokenSet::Size {
                width: Some(bbox.width),
                height: Some(bbox.height),
            }
        }
    }
}
