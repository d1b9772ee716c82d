use crate::config::AppConfig;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::RedrawDriver;
use crate::state::EditorState;
use crate::tool::ToolConfig;

/// Storage key for the selected tool. Drawings are never persisted.
const TOOL_KEY: &str = "sticker_sketch.tool";

/// Something the user asked for through the tool bar or a shortcut
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarAction {
    SelectPen(f32),
    SelectSticker(String),
    Undo,
    Redo,
    Clear,
}

#[derive(Debug)]
pub struct SketchApp {
    config: AppConfig,
    editor: EditorState,
    input: InputHandler,
    driver: RedrawDriver,
    /// Text typed into the custom sticker field
    pub(crate) custom_sticker: String,
    /// Last rejected action, shown in the status line
    last_error: Option<String>,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_config(AppConfig::default(), None)
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let saved_tool = cc
            .storage
            .and_then(|storage| eframe::get_value::<ToolConfig>(storage, TOOL_KEY));
        Self::with_config(config, saved_tool)
    }

    pub fn with_config(config: AppConfig, saved_tool: Option<ToolConfig>) -> Self {
        let mut editor = EditorState::from_config(&config);
        if let Some(tool) = saved_tool {
            if let Err(err) = editor.select_tool(tool) {
                log::warn!("Ignoring saved tool: {err}");
            }
        }

        let driver = RedrawDriver::new();
        driver.attach(&editor);

        Self {
            config,
            editor,
            input: InputHandler::new(),
            driver,
            custom_sticker: String::new(),
            last_error: None,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorState {
        &mut self.editor
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub(crate) fn input_and_editor(&mut self) -> (&mut InputHandler, &mut EditorState) {
        (&mut self.input, &mut self.editor)
    }

    pub(crate) fn driver_and_editor(&mut self) -> (&mut RedrawDriver, &EditorState) {
        (&mut self.driver, &self.editor)
    }

    pub fn apply(&mut self, action: ToolbarAction) {
        log::debug!("Toolbar action: {action:?}");
        let result = match action {
            ToolbarAction::SelectPen(thickness) => self.editor.select_pen_thickness(thickness),
            ToolbarAction::SelectSticker(glyph) => {
                self.editor.select_sticker(glyph, self.config.sticker_size)
            }
            ToolbarAction::Undo => {
                self.editor.undo();
                Ok(())
            }
            ToolbarAction::Redo => {
                self.editor.redo();
                Ok(())
            }
            ToolbarAction::Clear => {
                self.editor.clear();
                Ok(())
            }
        };

        match result {
            Ok(()) => self.last_error = None,
            Err(err) => {
                log::warn!("Rejected tool selection: {err}");
                self.last_error = Some(err.to_string());
            }
        }
    }

    fn shortcuts(ctx: &egui::Context) -> Option<ToolbarAction> {
        use egui::{Key, KeyboardShortcut, Modifiers};

        // Shift+Z first: the plain Z shortcut would also match it
        let redo_shift = KeyboardShortcut::new(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z);
        let redo = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
        let undo = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);

        ctx.input_mut(|input| {
            if input.consume_shortcut(&redo_shift) || input.consume_shortcut(&redo) {
                Some(ToolbarAction::Redo)
            } else if input.consume_shortcut(&undo) {
                Some(ToolbarAction::Undo)
            } else {
                None
            }
        })
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, TOOL_KEY, self.editor.tool());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(action) = Self::shortcuts(ctx) {
            self.apply(action);
        }

        tools_panel(self, ctx);
        central_panel(self, ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.driver.stop();
    }
}
