use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::timeline::{Timeline, TimelineItem};

/// Maximum number of retained undo steps. Pushing past the cap evicts the
/// oldest entry, bounding memory for long editing sessions.
pub const MAX_HISTORY: usize = 100;

/// A command that can be applied to and reverted from the item list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Command {
    /// Snapshot-based: stores the full item list before and after.
    Snapshot {
        description: String,
        before: Vec<TimelineItem>,
        after: Vec<TimelineItem>,
    },
}

impl Command {
    pub fn snapshot(
        description: impl Into<String>,
        before: Vec<TimelineItem>,
        after: Vec<TimelineItem>,
    ) -> Self {
        Command::Snapshot {
            description: description.into(),
            before,
            after,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Command::Snapshot { description, .. } => description,
        }
    }
}

/// Undo/redo history over the timeline's item list.
///
/// Only `items` participate in history; the event header is deliberately
/// outside it. One `execute` call is exactly one undo step, however many
/// items the closure touches.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CommandHistory {
    undo_stack: Vec<Command>,
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a mutation against the timeline, recording the pre/post item
    /// lists for undo. The snapshot is recorded even when the closure
    /// changed nothing (e.g. a patch for a missing id): the original
    /// contract counts every call as a step. Any new step discards the
    /// redo branch.
    pub fn execute<F, T>(&mut self, timeline: &mut Timeline, description: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut Timeline) -> Result<T>,
    {
        let before = timeline.items.clone();
        let result = f(timeline)?;
        self.undo_stack
            .push(Command::snapshot(description, before, timeline.items.clone()));
        if self.undo_stack.len() > MAX_HISTORY {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
        Ok(result)
    }

    /// Undo the last step, restoring the pre-mutation item list.
    pub fn undo(&mut self, timeline: &mut Timeline) -> Result<()> {
        let cmd = self.undo_stack.pop().ok_or(CoreError::NothingToUndo)?;
        match &cmd {
            Command::Snapshot { before, .. } => {
                timeline.items = before.clone();
            }
        }
        self.redo_stack.push(cmd);
        Ok(())
    }

    /// Redo the last undone step.
    pub fn redo(&mut self, timeline: &mut Timeline) -> Result<()> {
        let cmd = self.redo_stack.pop().ok_or(CoreError::NothingToRedo)?;
        match &cmd {
            Command::Snapshot { after, .. } => {
                timeline.items = after.clone();
            }
        }
        self.undo_stack.push(cmd);
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.last().map(|c| c.description())
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack.last().map(|c| c.description())
    }
}
