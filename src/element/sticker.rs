use egui::Pos2;

use super::Drawable;
use crate::surface::Surface;

/// A placed emoji sticker that can be dragged around while the pointer is held.
///
/// Every drag step spins the sticker a little; the accumulated angle only
/// ever grows and is left to the renderer's periodic rotation to wrap.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerPlacement {
    anchor: Pos2,
    glyph: String,
    size: f32,
    angle: f32,
}

impl StickerPlacement {
    pub fn new(anchor: Pos2, glyph: impl Into<String>, size: f32) -> Self {
        Self {
            anchor,
            glyph: glyph.into(),
            size,
            angle: 0.0,
        }
    }

    /// Move the sticker to `anchor` and spin it by `spin` radians
    pub fn drag_to(&mut self, anchor: Pos2, spin: f32) {
        self.anchor = anchor;
        self.angle += spin.abs();
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Accumulated rotation in radians
    pub fn angle(&self) -> f32 {
        self.angle
    }
}

impl Drawable for StickerPlacement {
    fn render(&self, surface: &mut dyn Surface) {
        surface.glyph(self.anchor, &self.glyph, self.size, self.angle);
    }
}
