use uuid::Uuid;

use crate::error::{CoreError, Result};
use crate::planner::Planner;
use crate::timeline::Timeline;

/// One in-progress drag gesture over the item list.
///
/// The session tracks which item is being dragged and where it currently
/// sits, so each hover event computes relative to the item's latest
/// position rather than where the drag started. Dropping or cancelling is
/// simply ceasing to call [`DragSession::hover`]: every hover has already
/// been committed through the planner as an undoable step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    item_id: Uuid,
    index: usize,
}

impl DragSession {
    pub(crate) fn begin(timeline: &Timeline, index: usize) -> Result<Self> {
        let item = timeline
            .items
            .get(index)
            .ok_or(CoreError::ItemIndexOutOfBounds {
                index,
                len: timeline.len(),
            })?;
        Ok(Self {
            item_id: item.id,
            index,
        })
    }

    pub fn item_id(&self) -> Uuid {
        self.item_id
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// React to the dragged item hovering over `hover_index`.
    ///
    /// Repositions the item and recomputes its start time from its new
    /// neighbors as one undo step. Hovering over the item's own current
    /// index is a no-op. If the list shrank under us (an item deleted by
    /// another control mid-drag), the stale index surfaces as an error and
    /// the gesture should be abandoned.
    pub fn hover(&mut self, planner: &mut Planner, hover_index: usize) -> Result<()> {
        if hover_index == self.index {
            return Ok(());
        }
        planner.move_item_reflow(self.index, hover_index)?;
        self.index = hover_index;
        Ok(())
    }
}
