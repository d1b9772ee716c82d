use crate::surface::Surface;

mod preview;
mod sticker;
mod stroke;

pub use preview::{StickerPreviewGlyph, ToolPreviewRing};
pub use sticker::StickerPlacement;
pub use stroke::Stroke;

/// Common trait for everything that can be drawn on the canvas
pub trait Drawable {
    /// Draw the element onto the provided surface.
    ///
    /// Must be a pure function of the element's current fields.
    fn render(&self, surface: &mut dyn Surface);
}
