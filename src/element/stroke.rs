use egui::Pos2;

use super::Drawable;
use crate::surface::Surface;

/// Pen-drawn polyline.
///
/// Thickness is fixed when the stroke is created; points are only ever
/// appended while the stroke is being drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    thickness: f32,
}

impl Stroke {
    /// Start a new stroke at `start`
    pub fn new(start: Pos2, thickness: f32) -> Self {
        Self {
            points: vec![start],
            thickness,
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }
}

impl Drawable for Stroke {
    fn render(&self, surface: &mut dyn Surface) {
        // A single point has no segment to trace
        if self.points.len() < 2 {
            return;
        }

        surface.polyline(&self.points, self.thickness);
    }
}
