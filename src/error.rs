use thiserror::Error;

/// Rejected tool selections.
///
/// Raised at the tool-configuration boundary so that a bad value never
/// reaches a command and corrupts later rendering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolConfigError {
    #[error("pen thickness must be a positive number, got {0}")]
    NonPositiveThickness(f32),

    #[error("sticker size must be a positive number, got {0}")]
    NonPositiveSize(f32),

    #[error("sticker glyph must not be empty")]
    EmptyGlyph,
}

/// Errors that can occur while loading an [`crate::AppConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid tool preset: {0}")]
    InvalidPreset(#[from] ToolConfigError),

    #[error("Invalid canvas size: {width}x{height}")]
    InvalidCanvas { width: f32, height: f32 },
}
