use std::collections::BTreeSet;

use uuid::Uuid;

use crate::timeline::Timeline;

/// Tracked set of selected item ids plus the bulk-edit mode flag.
///
/// Selection is UI state: it never participates in undo history. Bulk
/// operations over the selection live on [`crate::planner::Planner`] so
/// they route through the history dispatch path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: BTreeSet<Uuid>,
    bulk_edit: bool,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present.
    pub fn toggle(&mut self, id: Uuid) {
        if !self.selected.insert(id) {
            self.selected.remove(&id);
        }
    }

    /// Union all item ids in the given category into the selection.
    pub fn select_all_in_category(&mut self, timeline: &Timeline, category: &str) {
        self.selected.extend(timeline.ids_in_category(category));
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Switching bulk-edit mode off clears the selection.
    pub fn set_bulk_edit(&mut self, enabled: bool) {
        self.bulk_edit = enabled;
        if !enabled {
            self.selected.clear();
        }
    }

    pub fn bulk_edit(&self) -> bool {
        self.bulk_edit
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.selected.contains(&id)
    }

    pub fn ids(&self) -> &BTreeSet<Uuid> {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
