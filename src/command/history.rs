use super::Command;

/// Linear undo/redo over the committed drawing.
///
/// `committed` is drawn in order, so insertion order is z-order. Commands
/// undone from the tail of `committed` wait in `redoable` until they are
/// redone or a new commit throws them away. A command lives in at most one
/// of the two stacks.
#[derive(Debug, Default, Clone)]
pub struct CommandHistory {
    committed: Vec<Command>,
    redoable: Vec<Command>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command to the drawing and discard anything that could have been redone
    pub fn commit(&mut self, command: Command) {
        if !self.redoable.is_empty() {
            log::debug!("Discarding {} redoable command(s)", self.redoable.len());
            self.redoable.clear();
        }
        self.committed.push(command);
    }

    /// Undo the last committed command. Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(command) => {
                self.redoable.push(command);
                true
            }
            None => false,
        }
    }

    /// Redo the last undone command. Returns false when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redoable.pop() {
            Some(command) => {
                self.committed.push(command);
                true
            }
            None => false,
        }
    }

    /// Clear the command history
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redoable.clear();
    }

    /// The committed commands in drawing order
    pub fn snapshot(&self) -> &[Command] {
        &self.committed
    }

    /// Commands waiting to be redone, most recently undone last
    pub fn redoable(&self) -> &[Command] {
        &self.redoable
    }

    /// Mutable access to a committed command that is still being drawn or dragged
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Command> {
        self.committed.get_mut(index)
    }

    pub fn committed_len(&self) -> usize {
        self.committed.len()
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redoable.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty() && self.redoable.is_empty()
    }
}
