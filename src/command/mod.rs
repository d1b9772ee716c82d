mod history;

use crate::element::{
    Drawable, StickerPlacement, StickerPreviewGlyph, Stroke, ToolPreviewRing,
};
use crate::surface::Surface;

pub use history::CommandHistory;

/// Content that is committed to the drawing and takes part in undo/redo
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A pen stroke
    Stroke(Stroke),
    /// A placed sticker
    Sticker(StickerPlacement),
}

impl Command {
    /// Short label used by the history panel and logs
    pub fn label(&self) -> &'static str {
        match self {
            Self::Stroke(_) => "Stroke",
            Self::Sticker(_) => "Sticker",
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Self::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&StickerPlacement> {
        match self {
            Self::Sticker(sticker) => Some(sticker),
            _ => None,
        }
    }
}

impl Drawable for Command {
    fn render(&self, surface: &mut dyn Surface) {
        match self {
            Self::Stroke(stroke) => stroke.render(surface),
            Self::Sticker(sticker) => sticker.render(surface),
        }
    }
}

impl From<Stroke> for Command {
    fn from(stroke: Stroke) -> Self {
        Self::Stroke(stroke)
    }
}

impl From<StickerPlacement> for Command {
    fn from(sticker: StickerPlacement) -> Self {
        Self::Sticker(sticker)
    }
}

/// Ephemeral hover indicator for the active tool. Never enters history.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    Ring(ToolPreviewRing),
    Glyph(StickerPreviewGlyph),
}

impl Drawable for Preview {
    fn render(&self, surface: &mut dyn Surface) {
        match self {
            Self::Ring(ring) => ring.render(surface),
            Self::Glyph(glyph) => glyph.render(surface),
        }
    }
}
