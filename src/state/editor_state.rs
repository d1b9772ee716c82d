use egui::Pos2;

use super::InputState;
use crate::command::{Command, CommandHistory, Preview};
use crate::config::AppConfig;
use crate::element::{StickerPlacement, Stroke};
use crate::error::ToolConfigError;
use crate::event::{EventBus, Topic};
use crate::input::InputEvent;
use crate::tool::ToolConfig;

/// The editor: committed history, the selected tool and the pointer state machine.
///
/// Every handler runs to completion and then publishes a notification, so
/// a redraw never sees a half-applied change. Commands are committed on
/// pointer-down and extended in place while the pointer stays held.
#[derive(Debug)]
pub struct EditorState {
    history: CommandHistory,
    tool: ToolConfig,
    input: InputState,
    events: EventBus,
    over_canvas: bool,
    last_pointer: Option<Pos2>,
    /// Radians added to a dragged sticker per move
    sticker_spin: f32,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl EditorState {
    pub fn new(tool: ToolConfig, sticker_spin: f32) -> Self {
        Self {
            history: CommandHistory::new(),
            tool,
            input: InputState::Idle,
            events: EventBus::new(),
            over_canvas: false,
            last_pointer: None,
            sticker_spin,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.initial_tool(), config.sticker_spin())
    }

    // ---- queries ----

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn tool(&self) -> &ToolConfig {
        &self.tool
    }

    pub fn input_state(&self) -> &InputState {
        &self.input
    }

    /// The uncommitted hover indicator, if the pointer is hovering
    pub fn active_preview(&self) -> Option<&Preview> {
        self.input.preview()
    }

    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    pub fn is_over_canvas(&self) -> bool {
        self.over_canvas
    }

    /// Register a callback for a notification topic
    pub fn subscribe(&self, topic: Topic, handler: impl FnMut(Topic) + 'static) {
        self.events.subscribe(topic, handler);
    }

    // ---- pointer input ----

    /// Dispatch a normalized pointer event to its handler
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerEnter { position } => self.handle_pointer_enter(position),
            InputEvent::PointerLeave => self.handle_pointer_leave(),
            InputEvent::PointerDown {
                position,
                primary_held,
            } => self.handle_pointer_down(position, primary_held),
            InputEvent::PointerMove {
                position,
                primary_held,
            } => self.handle_pointer_move(position, primary_held),
            InputEvent::PointerUp => self.handle_pointer_up(),
        }
    }

    pub fn handle_pointer_enter(&mut self, pos: Pos2) {
        self.over_canvas = true;
        self.last_pointer = Some(pos);

        // Re-entering mid-drag keeps the drag going
        if !self.input.is_dragging() {
            self.input = InputState::Previewing(self.tool.preview_at(pos));
        }
        self.events.emit(Topic::ToolMoved);
    }

    pub fn handle_pointer_leave(&mut self) {
        self.over_canvas = false;
        if !self.input.is_dragging() {
            self.input = InputState::Idle;
        }
        self.events.emit(Topic::ToolMoved);
    }

    pub fn handle_pointer_down(&mut self, pos: Pos2, primary_held: bool) {
        if !primary_held {
            log::debug!("Ignoring pointer down without the primary button at {pos:?}");
            return;
        }
        if self.input.is_dragging() {
            // The previous release happened somewhere we could not see it
            self.end_drag();
        }

        self.over_canvas = true;
        self.last_pointer = Some(pos);

        let command: Command = match &self.tool {
            ToolConfig::Pen { thickness } => Stroke::new(pos, *thickness).into(),
            ToolConfig::Sticker { glyph, size } => {
                StickerPlacement::new(pos, glyph.as_str(), *size).into()
            }
        };
        log::info!("Committing new {} at {pos:?}", command.label());

        let is_sticker = matches!(command, Command::Sticker(_));
        self.history.commit(command);
        let index = self.history.committed_len() - 1;

        self.input = if is_sticker {
            InputState::DraggingSticker { index }
        } else {
            InputState::DrawingStroke { index }
        };
        self.events.emit(Topic::DrawingChanged);
    }

    pub fn handle_pointer_move(&mut self, pos: Pos2, primary_held: bool) {
        self.last_pointer = Some(pos);

        if !primary_held {
            // Off the canvas only pointer-up ends a drag, and there is nothing to preview
            if !self.over_canvas {
                return;
            }
            if self.input.is_dragging() {
                log::debug!("Button no longer held over the canvas, ending drag");
                self.end_drag();
            }
            self.input = InputState::Previewing(self.tool.preview_at(pos));
            self.events.emit(Topic::ToolMoved);
            return;
        }

        let changed = match self.input {
            InputState::DrawingStroke { index } => match self.history.get_mut(index) {
                Some(Command::Stroke(stroke)) => {
                    stroke.add_point(pos);
                    true
                }
                _ => false,
            },
            InputState::DraggingSticker { index } => match self.history.get_mut(index) {
                Some(Command::Sticker(sticker)) => {
                    sticker.drag_to(pos, self.sticker_spin);
                    true
                }
                _ => false,
            },
            // Pressed outside the canvas: nothing to extend
            InputState::Idle | InputState::Previewing(_) => false,
        };

        if changed {
            self.events.emit(Topic::DrawingChanged);
        }
    }

    pub fn handle_pointer_up(&mut self) {
        if self.input.is_dragging() {
            log::debug!("Finished {}", self.input.name());
        }
        self.input = self.resting_state();
        self.events.emit(Topic::ToolMoved);
    }

    // ---- tool selection ----

    pub fn select_pen_thickness(&mut self, thickness: f32) -> Result<(), ToolConfigError> {
        let tool = ToolConfig::pen(thickness)?;
        self.apply_tool(tool);
        Ok(())
    }

    pub fn select_sticker(
        &mut self,
        glyph: impl Into<String>,
        size: f32,
    ) -> Result<(), ToolConfigError> {
        let tool = ToolConfig::sticker(glyph, size)?;
        self.apply_tool(tool);
        Ok(())
    }

    /// Select an already-built tool, validating it first
    pub fn select_tool(&mut self, tool: ToolConfig) -> Result<(), ToolConfigError> {
        tool.validate()?;
        self.apply_tool(tool);
        Ok(())
    }

    fn apply_tool(&mut self, tool: ToolConfig) {
        log::info!("Tool selected: {tool:?}");
        self.tool = tool;

        // Commands in progress keep the settings they were created with
        if self.input.is_previewing() {
            if let Some(pos) = self.last_pointer {
                self.input = InputState::Previewing(self.tool.preview_at(pos));
            }
        }
        self.events.emit(Topic::ToolMoved);
    }

    // ---- history ----

    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo();
        self.after_history_change("undo", changed)
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo();
        self.after_history_change("redo", changed)
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.history.is_empty();
        self.history.clear();
        self.after_history_change("clear", changed)
    }

    fn after_history_change(&mut self, action: &str, changed: bool) -> bool {
        if !changed {
            log::debug!("Nothing to {action}");
            return false;
        }

        log::info!(
            "{action}: {} committed, {} redoable",
            self.history.committed_len(),
            self.history.redoable().len()
        );
        // The command being dragged may have just left `committed`
        if self.input.is_dragging() {
            self.end_drag();
        }
        self.events.emit(Topic::DrawingChanged);
        true
    }

    // ---- helpers ----

    fn end_drag(&mut self) {
        self.input = self.resting_state();
    }

    /// Where the state machine settles when no drag is active
    fn resting_state(&self) -> InputState {
        match (self.over_canvas, self.last_pointer) {
            (true, Some(pos)) => InputState::Previewing(self.tool.preview_at(pos)),
            _ => InputState::Idle,
        }
    }
}
