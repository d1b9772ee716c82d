// src/renderer.rs
use std::cell::Cell;
use std::rc::Rc;

use crate::element::Drawable;
use crate::event::Topic;
use crate::state::EditorState;
use crate::surface::Surface;

/// Full-scene redraw.
///
/// Clears the surface, draws every committed command in order and then the
/// active preview on top. Only reads the editor, so calling it twice in a
/// row produces the same draw calls.
pub fn render_frame(editor: &EditorState, surface: &mut dyn Surface) {
    surface.clear();

    for command in editor.history().snapshot() {
        command.render(surface);
    }

    if let Some(preview) = editor.active_preview() {
        preview.render(surface);
    }
}

/// Continuous redraw driver.
///
/// Redraws on every display refresh regardless of whether anything changed.
/// Notifications from the editor are only counted, so the driver can report
/// activity without deciding what changed.
#[derive(Debug)]
pub struct RedrawDriver {
    running: bool,
    frames: u64,
    pending: Rc<Cell<u64>>,
    last_tick_notifications: u64,
}

impl Default for RedrawDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl RedrawDriver {
    pub fn new() -> Self {
        Self {
            running: true,
            frames: 0,
            pending: Rc::new(Cell::new(0)),
            last_tick_notifications: 0,
        }
    }

    /// Count every notification the editor publishes
    pub fn attach(&self, editor: &EditorState) {
        for topic in [Topic::DrawingChanged, Topic::ToolMoved] {
            let pending = Rc::clone(&self.pending);
            editor.subscribe(topic, move |_| pending.set(pending.get() + 1));
        }
    }

    /// Draw one frame and, while running, ask egui for the next one
    pub fn tick(&mut self, ctx: &egui::Context, editor: &EditorState, surface: &mut dyn Surface) {
        self.frame(editor, surface);

        if self.running {
            // Request continuous rendering
            ctx.request_repaint();
        }
    }

    /// Draw one frame without scheduling another
    pub fn frame(&mut self, editor: &EditorState, surface: &mut dyn Surface) {
        self.last_tick_notifications = self.pending.replace(0);
        self.frames += 1;
        render_frame(editor, surface);
    }

    /// Stop scheduling repaints. Frames egui draws for other reasons still render.
    pub fn stop(&mut self) {
        log::info!("Redraw driver stopped after {} frames", self.frames);
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Notifications received between the previous frame and the last one
    pub fn last_tick_notifications(&self) -> u64 {
        self.last_tick_notifications
    }
}
