//! Token-set types and the merge rule.
//!
//! A token set is one structured record of style values read from a resolved
//! node, tagged by exportable kind. The eight kinds form a closed sum type so
//! the merger and the transformer can match exhaustively.

use crate::node::{
    Effect, Paint, TextAlignHorizontal, TextAlignVertical, TextCase, TextDecoration,
};

/// The eight style categories extractable from a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Exportable {
    Background,
    Fill,
    Border,
    Spacing,
    Typography,
    Effect,
    Opacity,
    Size,
}

impl Exportable {
    /// Recognize an exportable kind case-insensitively; `None` for unknown
    /// spellings (the caller warns and skips the kind).
    pub fn parse(s: &str) -> Option<Self> {
        let kind = match s.trim().to_ascii_uppercase().as_str() {
            "BACKGROUND" => Self::Background,
            "FILL" => Self::Fill,
            "BORDER" => Self::Border,
            "SPACING" => Self::Spacing,
            "TYPOGRAPHY" => Self::Typography,
            "EFFECT" => Self::Effect,
            "OPACITY" => Self::Opacity,
            "SIZE" => Self::Size,
            _ => return None,
        };
        Some(kind)
    }
}

impl std::fmt::Display for Exportable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Background => "BACKGROUND",
            Self::Fill => "FILL",
            Self::Border => "BORDER",
            Self::Spacing => "SPACING",
            Self::Typography => "TYPOGRAPHY",
            Self::Effect => "EFFECT",
            Self::Opacity => "OPACITY",
            Self::Size => "SIZE",
        };
        f.write_str(name)
    }
}

/// Box-model padding carried by a spacing token set, merged as one field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// One extracted style record, tagged by exportable kind.
///
/// Every field is optional so the merge rule can tell "no value" apart from
/// a real value; extraction itself always fills fields with type-appropriate
/// zero values rather than leaving them absent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "name", rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")
)]
pub enum TokenSet {
    Background {
        background: Option<Vec<Paint>>,
    },
    Fill {
        color: Option<Vec<Paint>>,
    },
    Border {
        weight: Option<f64>,
        radius: Option<f64>,
        dashes: Option<Vec<f64>>,
        strokes: Option<Vec<Paint>>,
    },
    Spacing {
        padding: Option<Padding>,
        spacing: Option<f64>,
    },
    Typography {
        font_family: Option<String>,
        font_size: Option<f64>,
        font_weight: Option<f64>,
        line_height_percent: Option<f64>,
        letter_spacing: Option<f64>,
        text_align_horizontal: Option<TextAlignHorizontal>,
        text_align_vertical: Option<TextAlignVertical>,
        text_decoration: Option<TextDecoration>,
        text_case: Option<TextCase>,
        characters: Option<String>,
    },
    Effect {
        effect: Option<Vec<Effect>>,
    },
    Opacity {
        opacity: Option<f64>,
    },
    Size {
        width: Option<f64>,
        height: Option<f64>,
    },
}

impl TokenSet {
    /// The kind tag of this record.
    pub fn exportable(&self) -> Exportable {
        match self {
            Self::Background { .. } => Exportable::Background,
            Self::Fill { .. } => Exportable::Fill,
            Self::Border { .. } => Exportable::Border,
            Self::Spacing { .. } => Exportable::Spacing,
            Self::Typography { .. } => Exportable::Typography,
            Self::Effect { .. } => Exportable::Effect,
            Self::Opacity { .. } => Exportable::Opacity,
            Self::Size { .. } => Exportable::Size,
        }
    }

    /// Merge a later same-kind record over this one, field-wise.
    ///
    /// The later record's field wins unless it is `None` and this record
    /// already holds a value; a later null never destroys earlier data. A
    /// kind mismatch yields the later record unchanged (callers only merge
    /// same-kind records).
    pub fn merged_with(&self, later: &TokenSet) -> TokenSet {
        fn pick<T: Clone>(earlier: &Option<T>, later: &Option<T>) -> Option<T> {
            later.clone().or_else(|| earlier.clone())
        }

        match (self, later) {
            (
                Self::Background { background: a },
                Self::Background { background: b },
            ) => Self::Background {
                background: pick(a, b),
            },
            (Self::Fill { color: a }, Self::Fill { color: b }) => Self::Fill {
                color: pick(a, b),
            },
            (
                Self::Border {
                    weight: w1,
                    radius: r1,
                    dashes: d1,
                    strokes: s1,
                },
                Self::Border {
                    weight: w2,
                    radius: r2,
                    dashes: d2,
                    strokes: s2,
                },
            ) => Self::Border {
                weight: pick(w1, w2),
                radius: pick(r1, r2),
                dashes: pick(d1, d2),
                strokes: pick(s1, s2),
            },
            (
                Self::Spacing {
                    padding: p1,
                    spacing: s1,
                },
                Self::Spacing {
                    padding: p2,
                    spacing: s2,
                },
            ) => Self::Spacing {
                padding: pick(p1, p2),
                spacing: pick(s1, s2),
            },
            (
                Self::Typography {
                    font_family: ff1,
                    font_size: fs1,
                    font_weight: fw1,
                    line_height_percent: lh1,
                    letter_spacing: ls1,
                    text_align_horizontal: tah1,
                    text_align_vertical: tav1,
                    text_decoration: td1,
                    text_case: tc1,
                    characters: ch1,
                },
                Self::Typography {
                    font_family: ff2,
                    font_size: fs2,
                    font_weight: fw2,
                    line_height_percent: lh2,
                    letter_spacing: ls2,
                    text_align_horizontal: tah2,
                    text_align_vertical: tav2,
                    text_decoration: td2,
                    text_case: tc2,
                    characters: ch2,
                },
            ) => Self::Typography {
                font_family: pick(ff1, ff2),
                font_size: pick(fs1, fs2),
                font_weight: pick(fw1, fw2),
                line_height_percent: pick(lh1, lh2),
                letter_spacing: pick(ls1, ls2),
                text_align_horizontal: pick(tah1, tah2),
                text_align_vertical: pick(tav1, tav2),
                text_decoration: pick(td1, td2),
                text_case: pick(tc1, tc2),
                characters: pick(ch1, ch2),
            },
            (Self::Effect { effect: a }, Self::Effect { effect: b }) => Self::Effect {
                effect: pick(a, b),
            },
            (Self::Opacity { opacity: a }, Self::Opacity { opacity: b }) => Self::Opacity {
                opacity: pick(a, b),
            },
            (
                Self::Size {
                    width: w1,
                    height: h1,
                },
                Self::Size {
                    width: w2,
                    height: h2,
                },
            ) => Self::Size {
                width: pick(w1, w2),
                height: pick(h1, h2),
            },
            (_, later) => later.clone(),
        }
    }
}
