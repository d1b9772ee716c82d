use egui::emath::Rot2;
use egui::epaint::TextShape;
use egui::{Color32, FontId, Painter, Pos2, Rect, Stroke as EguiStroke, Vec2};

/// Drawing backend capability the commands render onto.
///
/// Coordinates are surface-local. Implementations must not keep any state
/// between calls that would change how a later call is drawn, so a rotated
/// glyph never affects the next command.
pub trait Surface {
    /// Wipe everything drawn so far
    fn clear(&mut self);

    /// Connected line segments through `points` with the given width
    fn polyline(&mut self, points: &[Pos2], width: f32);

    /// Thin circle outline
    fn ring(&mut self, center: Pos2, radius: f32);

    /// Text glyph centred on `center`, `size` points tall, rotated by `angle` radians
    fn glyph(&mut self, center: Pos2, glyph: &str, size: f32, angle: f32);
}

/// A single call made against a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Polyline { points: Vec<Pos2>, width: f32 },
    Ring { center: Pos2, radius: f32 },
    Glyph { center: Pos2, glyph: String, size: f32, angle: f32 },
}

/// Surface that records every call as data instead of rasterizing.
///
/// Used for headless frame comparison in tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Take the recorded calls, leaving the surface empty
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn polyline(&mut self, points: &[Pos2], width: f32) {
        self.calls.push(DrawCall::Polyline {
            points: points.to_vec(),
            width,
        });
    }

    fn ring(&mut self, center: Pos2, radius: f32) {
        self.calls.push(DrawCall::Ring { center, radius });
    }

    fn glyph(&mut self, center: Pos2, glyph: &str, size: f32, angle: f32) {
        self.calls.push(DrawCall::Glyph {
            center,
            glyph: glyph.to_owned(),
            size,
            angle,
        });
    }
}

/// [`Surface`] backed by an egui [`Painter`] covering the canvas rectangle.
///
/// Surface-local coordinates are offset by the canvas origin.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    canvas: Rect,
    ink: Color32,
    background: Color32,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, canvas: Rect, ink: Color32, background: Color32) -> Self {
        Self {
            painter,
            canvas,
            ink,
            background,
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.canvas.min + pos.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.canvas, 0.0, self.background);
    }

    fn polyline(&mut self, points: &[Pos2], width: f32) {
        if points.len() < 2 {
            return;
        }

        let points = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(egui::Shape::line(points, EguiStroke::new(width, self.ink)));
    }

    fn ring(&mut self, center: Pos2, radius: f32) {
        self.painter
            .circle_stroke(self.to_screen(center), radius, EguiStroke::new(1.0, self.ink));
    }

    fn glyph(&mut self, center: Pos2, glyph: &str, size: f32, angle: f32) {
        let galley =
            self.painter
                .layout_no_wrap(glyph.to_owned(), FontId::proportional(size), self.ink);

        // Text shapes rotate around their top-left corner, so shift the
        // corner so the rotation pivots on the glyph's centre.
        let half: Vec2 = galley.size() / 2.0;
        let top_left = self.to_screen(center) - Rot2::from_angle(angle) * half;

        let mut shape = TextShape::new(top_left, galley, self.ink);
        shape.angle = angle;
        self.painter.add(shape);
    }
}
