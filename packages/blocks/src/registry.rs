//! # Block Schema Registry
//!
//! Static catalog of block kinds: display metadata plus the default content
//! and style a fresh block of that kind starts with. Defaults are built on
//! every call; nothing hands out a shared template, so mutating one block's
//! nested values can never leak into another block or into the registry.
//!
//! The registry also names presets: ordered groups of pre-filled blocks
//! inserted as one unit.

use crate::block::{Alignment, BlockContent, BlockStyle, Spacing};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Unknown block kind: {0}")]
    UnknownKind(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

/// Palette grouping for a block kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockCategory {
    Content,
    Media,
    Layout,
    Engagement,
}

impl BlockCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BlockCategory::Content => "Treść",
            BlockCategory::Media => "Media",
            BlockCategory::Layout => "Układ",
            BlockCategory::Engagement => "Interakcja",
        }
    }
}

/// Display metadata for one block kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockDefinition {
    pub kind: &'static str,
    pub name: &'static str,
    /// Icon tag the palette renders (lucide icon names).
    pub icon: &'static str,
    pub category: BlockCategory,
}

/// A named, ordered group of pre-filled blocks.
#[derive(Debug, Clone)]
pub struct Preset {
    pub key: &'static str,
    pub name: &'static str,
    pub blocks: Vec<(BlockContent, BlockStyle)>,
}

const DEFINITIONS: &[BlockDefinition] = &[
    BlockDefinition {
        kind: "header",
        name: "Nagłówek",
        icon: "layout-template",
        category: BlockCategory::Content,
    },
    BlockDefinition {
        kind: "text",
        name: "Tekst",
        icon: "type",
        category: BlockCategory::Content,
    },
    BlockDefinition {
        kind: "heading",
        name: "Tytuł sekcji",
        icon: "heading",
        category: BlockCategory::Content,
    },
    BlockDefinition {
        kind: "image",
        name: "Obraz",
        icon: "image",
        category: BlockCategory::Media,
    },
    BlockDefinition {
        kind: "button",
        name: "Przycisk",
        icon: "mouse-pointer-click",
        category: BlockCategory::Engagement,
    },
    BlockDefinition {
        kind: "divider",
        name: "Separator",
        icon: "minus",
        category: BlockCategory::Layout,
    },
    BlockDefinition {
        kind: "spacer",
        name: "Odstęp",
        icon: "move-vertical",
        category: BlockCategory::Layout,
    },
    BlockDefinition {
        kind: "columns",
        name: "Kolumny",
        icon: "columns-2",
        category: BlockCategory::Layout,
    },
    BlockDefinition {
        kind: "quote",
        name: "Cytat",
        icon: "quote",
        category: BlockCategory::Content,
    },
    BlockDefinition {
        kind: "list",
        name: "Lista",
        icon: "list",
        category: BlockCategory::Content,
    },
    BlockDefinition {
        kind: "video",
        name: "Film",
        icon: "video",
        category: BlockCategory::Media,
    },
    BlockDefinition {
        kind: "social",
        name: "Social media",
        icon: "share-2",
        category: BlockCategory::Engagement,
    },
    BlockDefinition {
        kind: "footer",
        name: "Stopka",
        icon: "panel-bottom",
        category: BlockCategory::Content,
    },
];

/// The static block catalog.
pub struct BlockRegistry;

impl BlockRegistry {
    /// All registered kinds, in palette order.
    pub fn kinds() -> impl Iterator<Item = &'static str> {
        DEFINITIONS.iter().map(|d| d.kind)
    }

    pub fn definitions() -> &'static [BlockDefinition] {
        DEFINITIONS
    }

    /// Display metadata for a kind, or `None` for unrecognized kinds.
    pub fn definition(kind: &str) -> Option<&'static BlockDefinition> {
        DEFINITIONS.iter().find(|d| d.kind == kind)
    }

    /// A fresh default content payload for a kind.
    pub fn default_content(kind: &str) -> Result<BlockContent, RegistryError> {
        let content = match kind {
            "header" => BlockContent::Header {
                title: "Wiadomości z parafii".to_string(),
                subtitle: "Biuletyn informacyjny".to_string(),
            },
            "text" => BlockContent::Text {
                html: "<p>Wpisz treść wiadomości...</p>".to_string(),
            },
            "heading" => BlockContent::Heading {
                html: "Tytuł sekcji".to_string(),
                level: 2,
            },
            "image" => BlockContent::Image {
                src: String::new(),
                alt: "Obraz".to_string(),
                link_url: String::new(),
                width_pct: 100,
            },
            "button" => BlockContent::Button {
                label: "Kliknij tutaj".to_string(),
                url: "#".to_string(),
                color: "#ec4899".to_string(),
                text_color: "#ffffff".to_string(),
            },
            "divider" => BlockContent::Divider {
                color: "#e5e7eb".to_string(),
                thickness: 1.0,
            },
            "spacer" => BlockContent::Spacer { height: 32.0 },
            "columns" => BlockContent::Columns {
                left_html: "<p>Lewa kolumna</p>".to_string(),
                right_html: "<p>Prawa kolumna</p>".to_string(),
                gap: 16.0,
            },
            "quote" => BlockContent::Quote {
                html: "Wpisz cytat...".to_string(),
                cite: String::new(),
                accent_color: "#ec4899".to_string(),
            },
            "list" => BlockContent::List {
                items: vec!["Pierwszy punkt".to_string(), "Drugi punkt".to_string()],
                ordered: false,
            },
            "video" => BlockContent::Video {
                video_url: String::new(),
                thumbnail_url: String::new(),
            },
            "social" => BlockContent::Social {
                facebook: String::new(),
                instagram: String::new(),
                youtube: String::new(),
                twitter: String::new(),
            },
            "footer" => BlockContent::Footer {
                html: "<p>© Parafia. Wszelkie prawa zastrzeżone.</p>".to_string(),
                unsubscribe_label: "Wypisz się".to_string(),
            },
            other => return Err(RegistryError::UnknownKind(other.to_string())),
        };
        Ok(content)
    }

    /// A fresh default style for a kind.
    pub fn default_style(kind: &str) -> BlockStyle {
        let mut style = BlockStyle::default();
        match kind {
            "header" => {
                style.align = Alignment::Center;
                style.padding = Spacing::sides(32.0, 24.0, 32.0, 24.0);
            }
            "text" | "quote" | "list" => {
                style.padding = Spacing::sides(12.0, 24.0, 12.0, 24.0);
            }
            "heading" => {
                style.padding = Spacing::sides(24.0, 24.0, 8.0, 24.0);
            }
            "image" | "video" => {
                style.align = Alignment::Center;
                style.padding = Spacing::uniform(0.0);
            }
            "button" | "social" => {
                style.align = Alignment::Center;
                style.padding = Spacing::sides(16.0, 24.0, 16.0, 24.0);
            }
            "columns" => {
                style.padding = Spacing::sides(12.0, 24.0, 12.0, 24.0);
            }
            "footer" => {
                style.align = Alignment::Center;
                style.padding = Spacing::sides(24.0, 24.0, 32.0, 24.0);
            }
            _ => {}
        }
        style
    }

    /// Fresh default content + style in one call.
    pub fn default_block(kind: &str) -> Result<(BlockContent, BlockStyle), RegistryError> {
        Ok((Self::default_content(kind)?, Self::default_style(kind)))
    }

    pub fn preset_keys() -> impl Iterator<Item = &'static str> {
        ["newsletter", "announcement"].into_iter()
    }

    /// A named preset with freshly built blocks, or an error for unknown keys.
    pub fn preset(key: &str) -> Result<Preset, RegistryError> {
        match key {
            "newsletter" => Ok(Preset {
                key: "newsletter",
                name: "Newsletter",
                blocks: vec![
                    Self::default_block("header")?,
                    Self::default_block("text")?,
                    Self::default_block("image")?,
                    Self::default_block("button")?,
                    Self::default_block("footer")?,
                ],
            }),
            "announcement" => Ok(Preset {
                key: "announcement",
                name: "Ogłoszenie",
                blocks: vec![
                    Self::default_block("heading")?,
                    Self::default_block("text")?,
                    Self::default_block("button")?,
                ],
            }),
            other => Err(RegistryError::UnknownPreset(other.to_string())),
        }
    }
}
