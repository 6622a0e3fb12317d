//! # Block Model
//!
//! The atomic content unit of an email document: an opaque id, a typed
//! content payload, and the shared style fields every kind carries.
//!
//! Content is a closed tagged union. Documents saved by a newer build may
//! reference kinds this build does not know; those load as
//! [`BlockContent::Unknown`] so the document stays editable and the gap is
//! visible at render time instead of failing the whole load.

use serde::{Deserialize, Serialize};

/// One typed content unit in the email document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    /// Opaque unique id, stable for the block's lifetime, never reused.
    pub id: String,
    pub content: BlockContent,
    pub style: BlockStyle,
}

impl Block {
    pub fn new(id: impl Into<String>, content: BlockContent, style: BlockStyle) -> Self {
        Self {
            id: id.into(),
            content,
            style,
        }
    }

    /// The kind tag this block serializes under.
    pub fn kind(&self) -> &str {
        self.content.kind()
    }
}

// Unknown `type` tags degrade to `BlockContent::Unknown` instead of failing
// the document load.
impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            id: String,
            content: serde_json::Value,
            #[serde(default)]
            style: BlockStyle,
        }

        let raw = Raw::deserialize(deserializer)?;
        let content = match serde_json::from_value::<BlockContent>(raw.content.clone()) {
            Ok(content) => content,
            Err(_) => {
                let kind = raw
                    .content
                    .get("type")
                    .and_then(|v| v.as_str())
                    .unwrap_or("?")
                    .to_string();
                BlockContent::Unknown { kind }
            }
        };

        Ok(Block {
            id: raw.id,
            content,
            style: raw.style,
        })
    }
}

/// Per-kind content payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockContent {
    Header {
        title: String,
        subtitle: String,
    },
    Text {
        html: String,
    },
    Heading {
        html: String,
        level: u8,
    },
    #[serde(rename_all = "camelCase")]
    Image {
        src: String,
        alt: String,
        link_url: String,
        width_pct: u8,
    },
    #[serde(rename_all = "camelCase")]
    Button {
        label: String,
        url: String,
        color: String,
        text_color: String,
    },
    Divider {
        color: String,
        thickness: f64,
    },
    Spacer {
        height: f64,
    },
    #[serde(rename_all = "camelCase")]
    Columns {
        left_html: String,
        right_html: String,
        gap: f64,
    },
    #[serde(rename_all = "camelCase")]
    Quote {
        html: String,
        cite: String,
        accent_color: String,
    },
    List {
        items: Vec<String>,
        ordered: bool,
    },
    #[serde(rename_all = "camelCase")]
    Video {
        video_url: String,
        thumbnail_url: String,
    },
    Social {
        facebook: String,
        instagram: String,
        youtube: String,
        twitter: String,
    },
    #[serde(rename_all = "camelCase")]
    Footer {
        html: String,
        unsubscribe_label: String,
    },
    /// Carrier for kinds this build does not recognize.
    Unknown {
        kind: String,
    },
}

impl BlockContent {
    pub fn kind(&self) -> &str {
        match self {
            BlockContent::Header { .. } => "header",
            BlockContent::Text { .. } => "text",
            BlockContent::Heading { .. } => "heading",
            BlockContent::Image { .. } => "image",
            BlockContent::Button { .. } => "button",
            BlockContent::Divider { .. } => "divider",
            BlockContent::Spacer { .. } => "spacer",
            BlockContent::Columns { .. } => "columns",
            BlockContent::Quote { .. } => "quote",
            BlockContent::List { .. } => "list",
            BlockContent::Video { .. } => "video",
            BlockContent::Social { .. } => "social",
            BlockContent::Footer { .. } => "footer",
            BlockContent::Unknown { kind } => kind,
        }
    }

    /// The primary rich-text field, if the kind has one.
    pub fn rich_text(&self) -> Option<&str> {
        match self {
            BlockContent::Header { title, .. } => Some(title),
            BlockContent::Text { html } => Some(html),
            BlockContent::Heading { html, .. } => Some(html),
            BlockContent::Button { label, .. } => Some(label),
            BlockContent::Quote { html, .. } => Some(html),
            BlockContent::Footer { html, .. } => Some(html),
            _ => None,
        }
    }

    /// Mutable access to the primary rich-text field, for inline editing.
    /// Kinds without one (image, divider, spacer, ...) return `None`.
    pub fn rich_text_mut(&mut self) -> Option<&mut String> {
        match self {
            BlockContent::Header { title, .. } => Some(title),
            BlockContent::Text { html } => Some(html),
            BlockContent::Heading { html, .. } => Some(html),
            BlockContent::Button { label, .. } => Some(label),
            BlockContent::Quote { html, .. } => Some(html),
            BlockContent::Footer { html, .. } => Some(html),
            _ => None,
        }
    }
}

/// Style fields shared by every block kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockStyle {
    pub align: Alignment,
    pub padding: Spacing,
    pub margin: Spacing,
    pub background: Background,
    pub border: Border,
    pub shadow: Shadow,
    pub border_radius: f64,
}

impl Default for BlockStyle {
    fn default() -> Self {
        Self {
            align: Alignment::Left,
            padding: Spacing::Uniform(0.0),
            margin: Spacing::Uniform(0.0),
            background: Background::default(),
            border: Border::default(),
            shadow: Shadow::default(),
            border_radius: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_css(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// Padding/margin value: a single number applied to all four sides, or an
/// explicit per-side object. Both shapes are valid at rest; which one was
/// intended is inferred by comparing the four sides (observed legacy
/// behavior; there is deliberately no discriminant tag).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Spacing {
    Uniform(f64),
    Sides {
        top: f64,
        right: f64,
        bottom: f64,
        left: f64,
    },
}

impl Spacing {
    pub fn uniform(value: f64) -> Self {
        Spacing::Uniform(value)
    }

    pub fn sides(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Spacing::Sides {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Resolved `[top, right, bottom, left]`, before any clamping.
    pub fn resolved(&self) -> [f64; 4] {
        match *self {
            Spacing::Uniform(v) => [v, v, v, v],
            Spacing::Sides {
                top,
                right,
                bottom,
                left,
            } => [top, right, bottom, left],
        }
    }

    /// A four-side value with all sides equal displays as uniform.
    pub fn is_uniform(&self) -> bool {
        let [t, r, b, l] = self.resolved();
        t == r && r == b && b == l
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Uniform(0.0)
    }
}

/// Background: flat color, gradient, or image (mutually exclusive) plus an
/// independent opacity that applies regardless of which one is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Background {
    pub color: String,
    pub gradient: Option<Gradient>,
    pub image: String,
    /// 0–100.
    pub opacity: u8,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            color: "transparent".to_string(),
            gradient: None,
            image: String::new(),
            opacity: 100,
        }
    }
}

impl Background {
    /// Activate the flat color, clearing gradient and image.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
        self.gradient = None;
        self.image.clear();
    }

    /// Activate the gradient, clearing color and image.
    pub fn set_gradient(&mut self, gradient: Gradient) {
        self.gradient = Some(gradient);
        self.color = "transparent".to_string();
        self.image.clear();
    }

    /// Activate the image, clearing color and gradient.
    pub fn set_image(&mut self, url: impl Into<String>) {
        self.image = url.into();
        self.color = "transparent".to_string();
        self.gradient = None;
    }

    pub fn is_empty(&self) -> bool {
        self.gradient.is_none()
            && self.image.is_empty()
            && (self.color.is_empty() || self.color == "transparent")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub kind: GradientKind,
    /// Degrees; only meaningful for linear gradients.
    pub angle: f64,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
}

/// Border specification; `width == 0` means no border regardless of the
/// other fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Border {
    pub width: f64,
    pub style: BorderStyle,
    pub color: String,
    pub sides: BorderSides,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            width: 0.0,
            style: BorderStyle::Solid,
            color: "#000000".to_string(),
            sides: BorderSides::default(),
        }
    }
}

impl Border {
    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && self.sides.any()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl BorderStyle {
    pub fn as_css(&self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderSides {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Default for BorderSides {
    fn default() -> Self {
        Self {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }
}

impl BorderSides {
    pub fn all(&self) -> bool {
        self.top && self.right && self.bottom && self.left
    }

    pub fn any(&self) -> bool {
        self.top || self.right || self.bottom || self.left
    }
}

/// Box-shadow specification. `direction` decides which offset axis is
/// honored; see the style resolver for the exact mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Shadow {
    pub enabled: bool,
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: String,
    pub inset: bool,
    pub direction: ShadowDirection,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            enabled: false,
            offset_x: 0.0,
            offset_y: 4.0,
            blur: 8.0,
            spread: 0.0,
            color: "rgba(0, 0, 0, 0.15)".to_string(),
            inset: false,
            direction: ShadowDirection::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowDirection {
    #[default]
    All,
    Top,
    Bottom,
    Left,
    Right,
    Horizontal,
    Vertical,
}
