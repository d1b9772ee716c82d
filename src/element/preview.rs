use egui::Pos2;

use super::Drawable;
use crate::surface::Surface;

/// Hover outline showing how wide the pen will draw
#[derive(Debug, Clone, PartialEq)]
pub struct ToolPreviewRing {
    pub center: Pos2,
    pub radius: f32,
}

impl ToolPreviewRing {
    pub fn for_thickness(center: Pos2, thickness: f32) -> Self {
        Self {
            center,
            radius: thickness / 2.0,
        }
    }
}

impl Drawable for ToolPreviewRing {
    fn render(&self, surface: &mut dyn Surface) {
        surface.ring(self.center, self.radius);
    }
}

/// Hover glyph showing which sticker a click will place
#[derive(Debug, Clone, PartialEq)]
pub struct StickerPreviewGlyph {
    pub position: Pos2,
    pub glyph: String,
    pub size: f32,
}

impl Drawable for StickerPreviewGlyph {
    fn render(&self, surface: &mut dyn Surface) {
        surface.glyph(self.position, &self.glyph, self.size, 0.0);
    }
}
