use egui::{Context, Pos2, Rect};

/// Normalized pointer events consumed by [`crate::EditorState`].
///
/// Positions are canvas-local: `(0, 0)` is the top-left corner of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved onto the canvas
    PointerEnter { position: Pos2 },
    /// Pointer left the canvas
    PointerLeave,
    /// Button pressed on the canvas
    PointerDown { position: Pos2, primary_held: bool },
    /// Pointer moved (with or without the primary button held)
    PointerMove { position: Pos2, primary_held: bool },
    /// Button released
    PointerUp,
}

/// Raw pointer state for one frame, in screen coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerFrame {
    pub hover_pos: Option<Pos2>,
    pub primary_down: bool,
    pub primary_pressed: bool,
    pub primary_released: bool,
}

/// Handles converting raw egui input into our domain-specific InputEvents
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Last canvas-local pointer position we reported
    last_pointer_pos: Option<Pos2>,
    inside: bool,
    /// A press started on the canvas and has not been released yet
    captured: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this frame's pointer state from egui and translate it
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        let frame = ctx.input(|input| PointerFrame {
            hover_pos: input.pointer.hover_pos(),
            primary_down: input.pointer.primary_down(),
            primary_pressed: input.pointer.primary_pressed(),
            primary_released: input.pointer.primary_released(),
        });
        self.translate(frame, canvas_rect)
    }

    /// Turn one frame of pointer state into canvas events.
    ///
    /// Events come out in the order enter, down, move, up, leave. While a
    /// press that started on the canvas is held, moves and the release are
    /// reported even outside the canvas.
    pub fn translate(&mut self, frame: PointerFrame, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();

        let inside = frame.hover_pos.is_some_and(|pos| canvas_rect.contains(pos));
        let local = frame
            .hover_pos
            .map(|pos| Pos2::ZERO + (pos - canvas_rect.min));

        if inside && !self.inside {
            if let Some(position) = local {
                events.push(InputEvent::PointerEnter { position });
            }
        }

        if frame.primary_pressed && inside {
            if let Some(position) = local {
                events.push(InputEvent::PointerDown {
                    position,
                    primary_held: true,
                });
                self.captured = true;
                self.last_pointer_pos = Some(position);
            }
        }

        if let Some(position) = local {
            if (inside || self.captured) && self.last_pointer_pos != Some(position) {
                // On the release frame the motion happened while the button was still down
                let primary_held =
                    frame.primary_down || (self.captured && frame.primary_released);
                events.push(InputEvent::PointerMove {
                    position,
                    primary_held,
                });
            }
            self.last_pointer_pos = Some(position);
        }

        if frame.primary_released && (self.captured || inside) {
            events.push(InputEvent::PointerUp);
            self.captured = false;
        }

        if !inside && self.inside {
            events.push(InputEvent::PointerLeave);
        }

        self.inside = inside;
        events
    }
}
