mod editor_state;
mod input_state;

pub use editor_state::EditorState;
pub use input_state::InputState;
