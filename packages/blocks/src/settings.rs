use serde::{Deserialize, Serialize};

/// Global email settings: one mutable record beside the block list, not
/// per-block state. The host only exposes the settings panel while no block
/// is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailSettings {
    /// Canvas color behind the content table.
    pub background_color: String,
    /// Fill of the fixed-width content table.
    pub content_background: String,
    /// Max content width in pixels.
    pub content_width: u32,
    pub font_family: String,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            background_color: "#f3f4f6".to_string(),
            content_background: "#ffffff".to_string(),
            content_width: 600,
            font_family: "Arial, Helvetica, sans-serif".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_round_trip_with_defaults() {
        let settings: EmailSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, EmailSettings::default());
        assert_eq!(settings.content_width, 600);
    }
}
