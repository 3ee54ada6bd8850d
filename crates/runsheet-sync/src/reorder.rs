use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::warn;
use uuid::Uuid;

use runsheet_core::timeline::TimelineItem;

use crate::backend::PersistBackend;
use crate::error::{Result, SyncError};

/// Delay between the last local reorder and the commit to the backend.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(800);

struct ListState {
    items: Vec<TimelineItem>,
    /// Last order confirmed by the backend; reverted to on failure.
    last_good: Vec<TimelineItem>,
}

/// Debounced optimistic reorder committer for one reorderable list.
///
/// Local order updates immediately on every [`ReorderSync::apply_reorder`];
/// the backend commit is debounced so a burst of drags collapses into one
/// request. Each new reorder aborts the pending timer and schedules a
/// fresh one, keeping at most a single in-flight commit per list. On
/// success the backend's returned list replaces both the live list and the
/// last-known-good snapshot; on failure the live list reverts to the
/// snapshot.
pub struct ReorderSync<B> {
    backend: Arc<B>,
    container_id: Uuid,
    debounce: Duration,
    state: Arc<Mutex<ListState>>,
    pending: Option<JoinHandle<()>>,
}

impl<B: PersistBackend + 'static> ReorderSync<B> {
    pub fn new(backend: Arc<B>, container_id: Uuid, items: Vec<TimelineItem>) -> Self {
        Self::with_debounce(backend, container_id, items, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(
        backend: Arc<B>,
        container_id: Uuid,
        items: Vec<TimelineItem>,
        debounce: Duration,
    ) -> Self {
        Self {
            backend,
            container_id,
            debounce,
            state: Arc::new(Mutex::new(ListState {
                last_good: items.clone(),
                items,
            })),
            pending: None,
        }
    }

    /// Current (possibly unconfirmed) local order.
    pub fn items(&self) -> Vec<TimelineItem> {
        self.lock_state().items.clone()
    }

    pub fn ordered_ids(&self) -> Vec<Uuid> {
        self.lock_state().items.iter().map(|i| i.id).collect()
    }

    /// Whether a commit is still scheduled or in flight.
    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Splice-and-reinsert locally, then (re)schedule the debounced commit.
    pub fn apply_reorder(&mut self, drag_index: usize, hover_index: usize) -> Result<()> {
        {
            let mut state = self.lock_state();
            let len = state.items.len();
            if drag_index >= len {
                return Err(SyncError::IndexOutOfBounds {
                    index: drag_index,
                    len,
                });
            }
            if hover_index >= len {
                return Err(SyncError::IndexOutOfBounds {
                    index: hover_index,
                    len,
                });
            }
            let item = state.items.remove(drag_index);
            state.items.insert(hover_index, item);
        }
        self.schedule_commit();
        Ok(())
    }

    /// Wait for the pending commit, if any, to run to completion.
    pub async fn flush(&mut self) {
        if let Some(handle) = self.pending.take() {
            let _ = handle.await;
        }
    }

    fn schedule_commit(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        let backend = Arc::clone(&self.backend);
        let state = Arc::clone(&self.state);
        let container_id = self.container_id;
        let delay = self.debounce;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let ordered: Vec<Uuid> = {
                let state = state.lock().expect("reorder state lock poisoned");
                state.items.iter().map(|i| i.id).collect()
            };

            match backend.persist_reorder(container_id, &ordered).await {
                Ok(confirmed) => {
                    let mut state = state.lock().expect("reorder state lock poisoned");
                    state.last_good = confirmed.clone();
                    state.items = confirmed;
                }
                Err(e) => {
                    warn!(
                        %container_id,
                        error = %e,
                        "reorder persistence failed, reverting to last known-good order"
                    );
                    let mut state = state.lock().expect("reorder state lock poisoned");
                    state.items = state.last_good.clone();
                }
            }
        }));
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, ListState> {
        self.state.lock().expect("reorder state lock poisoned")
    }
}
