use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tool::ToolConfig;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "STICKER_SKETCH_CONFIG";

/// A named pen width offered in the tool bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenPreset {
    pub label: String,
    pub thickness: f32,
}

/// Application settings.
///
/// Every field has a default, so a config file only needs to list what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub ink: Color32,
    pub background: Color32,
    pub pens: Vec<PenPreset>,
    pub stickers: Vec<String>,
    pub sticker_size: f32,
    /// Rotation added to a sticker per drag step, in degrees
    pub sticker_spin_degrees: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_width: 256.0,
            canvas_height: 256.0,
            ink: Color32::BLACK,
            background: Color32::WHITE,
            pens: vec![
                PenPreset {
                    label: "thin".to_owned(),
                    thickness: 2.0,
                },
                PenPreset {
                    label: "thick".to_owned(),
                    thickness: 6.0,
                },
            ],
            stickers: vec!["😭".to_owned(), "🔥".to_owned(), "⭐".to_owned()],
            sticker_size: 24.0,
            sticker_spin_degrees: 10.0,
        }
    }
}

impl AppConfig {
    /// Load and validate a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every preset would make a valid tool
    pub fn validate(&self) -> Result<(), ConfigError> {
        let canvas_ok = |v: f32| v.is_finite() && v > 0.0;
        if !canvas_ok(self.canvas_width) || !canvas_ok(self.canvas_height) {
            return Err(ConfigError::InvalidCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }

        for pen in &self.pens {
            ToolConfig::pen(pen.thickness)?;
        }
        for glyph in &self.stickers {
            ToolConfig::sticker(glyph.as_str(), self.sticker_size)?;
        }
        Ok(())
    }

    /// Sticker spin step in radians
    pub fn sticker_spin(&self) -> f32 {
        self.sticker_spin_degrees.to_radians()
    }

    /// The tool selected on first start: the first pen preset, or the default pen
    pub fn initial_tool(&self) -> ToolConfig {
        self.pens
            .first()
            .and_then(|pen| ToolConfig::pen(pen.thickness).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolConfigError;

    #[test]
    fn test_default_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_tool(), ToolConfig::Pen { thickness: 2.0 });
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "sticker_size": 40.0, "stickers": ["🎉"] }"#).unwrap();
        assert_eq!(config.sticker_size, 40.0);
        assert_eq!(config.stickers, vec!["🎉".to_owned()]);
        assert_eq!(config.canvas_width, 256.0);
        assert_eq!(config.pens.len(), 2);
    }

    #[test]
    fn test_invalid_presets_rejected() {
        let err = AppConfig::from_json(r#"{ "pens": [{ "label": "bad", "thickness": 0.0 }] }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidPreset(ToolConfigError::NonPositiveThickness(_))
        ));

        let err = AppConfig::from_json(r#"{ "stickers": [""] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPreset(ToolConfigError::EmptyGlyph)));

        let err = AppConfig::from_json(r#"{ "canvas_width": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCanvas { .. }));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            AppConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_spin_in_radians() {
        let config = AppConfig::default();
        assert!((config.sticker_spin() - 10f32.to_radians()).abs() < 1e-6);
    }
}
