//! The design-document node tree.
//!
//! Nodes arrive already parsed from whatever wire format the design tool
//! produces. The engine treats the tree as immutable, shared, read-only data:
//! extraction borrows nodes and clones only the style payloads it keeps.

/// Node type tags, a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum NodeType {
    Document,
    Canvas,
    #[default]
    Frame,
    Group,
    Vector,
    BooleanOperation,
    Star,
    Line,
    Ellipse,
    RegularPolygon,
    Rectangle,
    Text,
    Slice,
    Component,
    ComponentSet,
    Instance,
}

impl NodeType {
    /// Recognize a wire spelling (`FRAME`, `boolean_operation`, ...) case-insensitively.
    ///
    /// Returns `None` for spellings outside the closed set; selector segments
    /// with an unrecognized type are treated as no-ops by the resolver.
    pub fn parse(s: &str) -> Option<Self> {
        let ty = match s.trim().to_ascii_uppercase().as_str() {
            "DOCUMENT" => Self::Document,
            "CANVAS" => Self::Canvas,
            "FRAME" => Self::Frame,
            "GROUP" => Self::Group,
            "VECTOR" => Self::Vector,
            "BOOLEAN_OPERATION" => Self::BooleanOperation,
            "STAR" => Self::Star,
            "LINE" => Self::Line,
            "ELLIPSE" => Self::Ellipse,
            "REGULAR_POLYGON" => Self::RegularPolygon,
            "RECTANGLE" => Self::Rectangle,
            "TEXT" => Self::Text,
            "SLICE" => Self::Slice,
            "COMPONENT" => Self::Component,
            "COMPONENT_SET" => Self::ComponentSet,
            "INSTANCE" => Self::Instance,
            _ => return None,
        };
        Some(ty)
    }
}

/// A node in the source style tree.
///
/// Style fields are type-conditional on the wire; all of them are optional or
/// defaulted here so any node can be read through any extraction path.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DesignNode {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<DesignNode>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fills: Vec<Paint>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub strokes: Vec<Paint>,
    pub stroke_weight: Option<f64>,
    pub stroke_dashes: Option<Vec<f64>>,
    pub corner_radius: Option<f64>,
    pub rectangle_corner_radii: Option<[f64; 4]>,
    pub padding_top: Option<f64>,
    pub padding_right: Option<f64>,
    pub padding_bottom: Option<f64>,
    pub padding_left: Option<f64>,
    pub item_spacing: Option<f64>,
    pub opacity: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<Effect>,
    pub absolute_bounding_box: Option<Rect>,
    pub style: Option<TypeStyle>,
    pub characters: Option<String>,
}

impl DesignNode {
    /// Create a bare node; style fields start empty.
    pub fn new(id: &str, name: &str, node_type: NodeType) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            node_type,
            ..Self::default()
        }
    }

    /// Depth-first pre-order traversal of this node's strict descendants.
    ///
    /// This is the traversal order every selector search and the legacy
    /// root fallback use.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }
}

/// Iterator over a node's descendants in depth-first pre-order.
pub struct Descendants<'a> {
    stack: Vec<&'a DesignNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a DesignNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        for child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

/// Paint kinds, a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum PaintType {
    #[default]
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
}

/// A single paint layer of a fill or stroke.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Paint {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub paint_type: PaintType,
    /// Absent means visible.
    pub visible: Option<bool>,
    /// Layer opacity, multiplied into the color alpha during composition.
    pub opacity: Option<f64>,
    pub color: Option<Rgba>,
    pub blend_mode: Option<String>,
}

impl Paint {
    /// A visible solid paint at full layer opacity.
    pub fn solid(color: Rgba) -> Self {
        Self {
            paint_type: PaintType::Solid,
            color: Some(color),
            ..Self::default()
        }
    }

    /// Whether this layer renders at all.
    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }
}

/// A color value with unit-interval channels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create from a hex string (e.g. "#FF5733" or "FF5733AA").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .ok()
                .map(|v| v as f64 / 255.0)
        };
        match hex.len() {
            6 => Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Some(Self::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => None,
        }
    }

    /// Convert to 8-bit RGBA, rounding each channel.
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        let to8 = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (to8(self.r), to8(self.g), to8(self.b), to8(self.a))
    }
}

/// Effect kinds, a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum EffectType {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
}

/// A visual effect attached to a node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Effect {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub effect_type: EffectType,
    pub visible: Option<bool>,
    pub color: Option<Rgba>,
    pub offset: Option<Vector2>,
    pub radius: Option<f64>,
    pub spread: Option<f64>,
}

impl Effect {
    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }
}

/// A 2D offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum TextAlignHorizontal {
    #[default]
    Left,
    Right,
    Center,
    Justified,
}

/// Vertical text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum TextAlignVertical {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Text decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    Strikethrough,
}

/// Letter-case transformation; absent on the wire means `Original`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum TextCase {
    #[default]
    Original,
    Upper,
    Lower,
    Title,
    SmallCaps,
    SmallCapsForced,
}

/// Typography style attached to a text node.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TypeStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<f64>,
    /// Line height as a percentage of font size.
    pub line_height_percent_font_size: Option<f64>,
    pub letter_spacing: Option<f64>,
    pub text_align_horizontal: Option<TextAlignHorizontal>,
    pub text_align_vertical: Option<TextAlignVertical>,
    pub text_decoration: Option<TextDecoration>,
    pub text_case: Option<TextCase>,
}

/// A raw component node paired with the metadata its authored source carries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RawComponent {
    pub node: DesignNode,
    pub metadata: ComponentMetadata,
}

/// Metadata describing where a raw component was authored.
///
/// `id` is the stable id of the authored component; every variant of one
/// authored set shares it, which is what shared-variant rules match on.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ComponentMetadata {
    pub id: String,
    pub name: String,
    pub description: String,
}
