use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::command::Preview;
use crate::element::{StickerPreviewGlyph, ToolPreviewRing};
use crate::error::ToolConfigError;

/// The currently selected tool and its settings.
///
/// Exactly one mode is active at a time. Values are validated on
/// construction, so a `ToolConfig` always describes something drawable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToolConfig {
    /// Freehand pen with a fixed line width
    Pen { thickness: f32 },
    /// Emoji sticker stamped at a fixed size
    Sticker { glyph: String, size: f32 },
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self::Pen { thickness: 2.0 }
    }
}

impl ToolConfig {
    pub fn pen(thickness: f32) -> Result<Self, ToolConfigError> {
        if !is_positive(thickness) {
            return Err(ToolConfigError::NonPositiveThickness(thickness));
        }
        Ok(Self::Pen { thickness })
    }

    pub fn sticker(glyph: impl Into<String>, size: f32) -> Result<Self, ToolConfigError> {
        let glyph = glyph.into();
        if glyph.trim().is_empty() {
            return Err(ToolConfigError::EmptyGlyph);
        }
        if !is_positive(size) {
            return Err(ToolConfigError::NonPositiveSize(size));
        }
        Ok(Self::Sticker { glyph, size })
    }

    /// Re-check a config that did not come through the constructors
    /// (e.g. deserialized from storage)
    pub fn validate(&self) -> Result<(), ToolConfigError> {
        match self {
            Self::Pen { thickness } => Self::pen(*thickness).map(drop),
            Self::Sticker { glyph, size } => Self::sticker(glyph.as_str(), *size).map(drop),
        }
    }

    pub fn is_sticker(&self) -> bool {
        matches!(self, Self::Sticker { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pen { .. } => "Pen",
            Self::Sticker { .. } => "Sticker",
        }
    }

    /// The hover preview this tool shows at `pos`
    pub fn preview_at(&self, pos: Pos2) -> Preview {
        match self {
            Self::Pen { thickness } => Preview::Ring(ToolPreviewRing::for_thickness(pos, *thickness)),
            Self::Sticker { glyph, size } => Preview::Glyph(StickerPreviewGlyph {
                position: pos,
                glyph: glyph.clone(),
                size: *size,
            }),
        }
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
