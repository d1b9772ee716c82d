#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod element;
pub mod error;
pub mod event;
pub mod input;
mod panels;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod tool;

pub use app::SketchApp;
pub use command::{Command, CommandHistory, Preview};
pub use config::AppConfig;
pub use element::{Drawable, StickerPlacement, Stroke};
pub use error::{ConfigError, ToolConfigError};
pub use event::{EventBus, Topic};
pub use input::{InputEvent, InputHandler};
pub use renderer::{RedrawDriver, render_frame};
pub use state::{EditorState, InputState};
pub use surface::{DrawCall, PainterSurface, RecordingSurface, Surface};
pub use tool::ToolConfig;
