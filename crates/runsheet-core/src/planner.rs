use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::commands::CommandHistory;
use crate::drag::DragSession;
use crate::error::Result;
use crate::selection::Selection;
use crate::timeline::{ItemPatch, Timeline, TimelineItem, WeddingInfoPatch};

/// The owned state container for one event timeline.
///
/// All mutations go through `Planner` methods so that every item-list
/// change is routed through [`CommandHistory::execute`] and the snapshot
/// invariant cannot be bypassed. Readers get `&Timeline` / `&Selection`
/// and never mutate directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planner {
    name: String,
    timeline: Timeline,
    #[serde(skip)]
    history: CommandHistory,
    #[serde(skip)]
    selection: Selection,
}

impl Planner {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            timeline: Timeline::new(),
            history: CommandHistory::new(),
            selection: Selection::new(),
        }
    }

    /// Build a planner around an existing timeline, with fresh history
    /// and selection.
    pub fn from_timeline(name: impl Into<String>, timeline: Timeline) -> Self {
        Self {
            name: name.into(),
            timeline,
            history: CommandHistory::new(),
            selection: Selection::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    // ---- item mutations, one undo step each ----

    /// Append an item, returning its id.
    pub fn add_item(&mut self, item: TimelineItem) -> Result<Uuid> {
        let id = item.id;
        self.history.execute(&mut self.timeline, "Add item", |tl| {
            tl.add_item(item);
            Ok(())
        })?;
        Ok(id)
    }

    /// Merge a patch into the item with the given id. A missing id is a
    /// tolerated no-op, but still recorded as a history step.
    pub fn update_item(&mut self, id: Uuid, patch: ItemPatch) -> Result<bool> {
        self.history.execute(&mut self.timeline, "Update item", |tl| {
            Ok(tl.update_item(id, &patch))
        })
    }

    /// Remove the item with the given id; a missing id is a tolerated
    /// no-op, still recorded as a history step.
    pub fn delete_item(&mut self, id: Uuid) -> Result<bool> {
        self.history.execute(&mut self.timeline, "Delete item", |tl| {
            Ok(tl.delete_item(id))
        })
    }

    /// Splice-and-reinsert reorder, without touching any times.
    pub fn move_item(&mut self, drag_index: usize, hover_index: usize) -> Result<()> {
        self.history.execute(&mut self.timeline, "Move item", |tl| {
            tl.move_item(drag_index, hover_index)
        })
    }

    /// Reorder an item and recompute its start time from its new
    /// neighbors, as a single undo step:
    ///
    /// - moved later: new start = previous neighbor's start + duration
    /// - moved earlier: new start = next neighbor's start minus the moved
    ///   item's own duration, except at index 0 (no earlier neighbor)
    ///   where the start is left unchanged
    pub fn move_item_reflow(&mut self, drag_index: usize, hover_index: usize) -> Result<()> {
        // Equal indices are a no-move: no time rewrite, no history step.
        if drag_index == hover_index {
            return Ok(());
        }
        self.history
            .execute(&mut self.timeline, "Reorder item", |tl| {
                tl.move_item(drag_index, hover_index)?;

                let new_start = if hover_index > drag_index {
                    tl.items
                        .get(hover_index - 1)
                        .map(|prev| prev.start_minutes() + prev.duration_minutes())
                } else if hover_index == 0 {
                    None
                } else {
                    let own = tl.items[hover_index].duration_minutes();
                    tl.items
                        .get(hover_index + 1)
                        .map(|next| next.start_minutes() - own)
                };

                if let Some(start) = new_start {
                    tl.items[hover_index].set_start(start);
                }
                Ok(())
            })
    }

    /// Stably sort items ascending by start time.
    pub fn sort_items(&mut self) -> Result<()> {
        self.history.execute(&mut self.timeline, "Sort items", |tl| {
            tl.sort_items();
            Ok(())
        })
    }

    // ---- event header (outside history) ----

    pub fn update_wedding_info(&mut self, patch: &WeddingInfoPatch) {
        self.timeline.update_wedding_info(patch);
    }

    // ---- selection & bulk edit ----

    pub fn toggle_selection(&mut self, id: Uuid) {
        self.selection.toggle(id);
    }

    pub fn select_all_in_category(&mut self, category: &str) {
        self.selection.select_all_in_category(&self.timeline, category);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn set_bulk_edit(&mut self, enabled: bool) {
        self.selection.set_bulk_edit(enabled);
    }

    /// Shift every selected item by `minutes`, as one undo step covering
    /// the whole selection. An empty selection is a complete no-op: no
    /// history entry is recorded.
    pub fn adjust_selected_times(&mut self, minutes: i32) -> Result<()> {
        if self.selection.is_empty() {
            return Ok(());
        }
        let ids = self.selection.ids().clone();
        self.history
            .execute(&mut self.timeline, "Shift selected items", |tl| {
                tl.shift_items(&ids, minutes);
                Ok(())
            })
    }

    /// Delete every selected item as one undo step, then clear the
    /// selection. An empty selection is a complete no-op.
    pub fn delete_selected(&mut self) -> Result<()> {
        if self.selection.is_empty() {
            return Ok(());
        }
        let ids = self.selection.ids().clone();
        self.history
            .execute(&mut self.timeline, "Delete selected items", |tl| {
                tl.remove_items(&ids);
                Ok(())
            })?;
        self.selection.clear();
        Ok(())
    }

    // ---- drag ----

    /// Start a drag gesture over the item at `index`.
    pub fn begin_drag(&self, index: usize) -> Result<DragSession> {
        DragSession::begin(&self.timeline, index)
    }

    // ---- history ----

    pub fn undo(&mut self) -> Result<()> {
        self.history.undo(&mut self.timeline)
    }

    pub fn redo(&mut self) -> Result<()> {
        self.history.redo(&mut self.timeline)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.history.undo_description()
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.history.redo_description()
    }

    // ---- persistence ----

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a planner from disk. History and selection are not persisted;
    /// a loaded planner starts with both empty.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let planner: Self = serde_json::from_str(&json)?;
        Ok(planner)
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
