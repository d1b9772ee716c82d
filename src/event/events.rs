use std::fmt;

/// Named notification topics published by the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Committed content changed (new command, extended command, undo/redo/clear)
    DrawingChanged,
    /// The hover preview or the selected tool changed
    ToolMoved,
}

impl Topic {
    pub fn as_str(self) -> &'static str {
        match self {
            Topic::DrawingChanged => "drawing-changed",
            Topic::ToolMoved => "tool-moved",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
