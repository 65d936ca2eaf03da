use crate::model::frame::FrameConfig;

/// Linear undo history of frame configurations.
///
/// Entries are never edited in place: new configurations are appended after the cursor, dropping
/// any redo tail, and undo/redo only move the cursor.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameHistory {
    entries: Vec<FrameConfig>,
    index: usize,
}

impl FrameHistory {
    /// Start a history with a single entry.
    pub fn new(initial: FrameConfig) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// The configuration under the cursor.
    pub fn current(&self) -> &FrameConfig {
        &self.entries[self.index]
    }

    /// Truncate the redo tail and append `config` as the new current entry.
    pub fn push(&mut self, config: FrameConfig) {
        self.entries.truncate(self.index + 1);
        self.entries.push(config);
        self.index = self.entries.len() - 1;
        tracing::debug!(index = self.index, len = self.entries.len(), "frame history push");
    }

    /// Step back; returns `false` at the oldest entry.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward; returns `false` at the newest entry.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Whether [`Self::undo`] would move.
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Whether [`Self::redo`] would move.
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Cursor position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of stored entries, including the redo tail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; a history holds at least one entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/history.rs"]
mod tests;
