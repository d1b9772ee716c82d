use crate::command::Preview;

/// Pointer interaction state of the editor.
///
/// ```text
///            enter / move                 down (pen)
///   ┌──────┐ ───────────► ┌────────────┐ ───────────► ┌───────────────┐
///   │ Idle │              │ Previewing │              │ DrawingStroke │
///   └──────┘ ◄─────────── └────────────┘ ◄─────────── └───────────────┘
///               leave           │    ▲        up
///                               │    │
///                   down        ▼    │ up
///                   (sticker) ┌─────────────────┐
///                             │ DraggingSticker │
///                             └─────────────────┘
/// ```
///
/// The drag states refer to a command that is already committed; `index`
/// is its position in the committed history. Only pointer-up (or a
/// history change) ends a drag, leaving the canvas does not.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputState {
    /// Pointer is up and not over the canvas
    #[default]
    Idle,
    /// Pointer hovers over the canvas showing the tool preview
    Previewing(Preview),
    /// Pen is down, extending the stroke at `index`
    DrawingStroke { index: usize },
    /// Sticker is down, being dragged at `index`
    DraggingSticker { index: usize },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_previewing(&self) -> bool {
        matches!(self, Self::Previewing(_))
    }

    /// Returns true while a stroke or sticker is being drawn or dragged
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::DrawingStroke { .. } | Self::DraggingSticker { .. })
    }

    pub fn preview(&self) -> Option<&Preview> {
        match self {
            Self::Previewing(preview) => Some(preview),
            _ => None,
        }
    }

    /// Name used in logs and the status line
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Previewing(_) => "Previewing",
            Self::DrawingStroke { .. } => "DrawingStroke",
            Self::DraggingSticker { .. } => "DraggingSticker",
        }
    }
}
