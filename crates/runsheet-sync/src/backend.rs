use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::warn;
use uuid::Uuid;

use runsheet_core::timeline::{ItemPatch, TimelineItem};

use crate::error::Result;

/// The persistence collaborator the engine hands changes to.
///
/// The engine never retries; retry and backoff, if any, belong to the
/// implementation. Last-write-wins is the implicit contract: there is no
/// conflict detection against concurrent sessions.
#[async_trait]
pub trait PersistBackend: Send + Sync {
    /// Persist a new item order for a container. Returns the full updated
    /// item list, which the caller uses to reconcile optimistic state.
    async fn persist_reorder(
        &self,
        container_id: Uuid,
        ordered_ids: &[Uuid],
    ) -> Result<Vec<TimelineItem>>;

    async fn persist_item_create(&self, item: &TimelineItem) -> Result<TimelineItem>;

    async fn persist_item_update(&self, id: Uuid, patch: &ItemPatch) -> Result<TimelineItem>;

    async fn persist_item_delete(&self, id: Uuid) -> Result<()>;
}

/// Fire-and-forget item create: spawn, log on failure, never retry.
pub fn spawn_item_create<B: PersistBackend + 'static>(
    backend: Arc<B>,
    item: TimelineItem,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = backend.persist_item_create(&item).await {
            warn!(item_id = %item.id, error = %e, "item create persistence failed");
        }
    })
}

/// Fire-and-forget item update.
pub fn spawn_item_update<B: PersistBackend + 'static>(
    backend: Arc<B>,
    id: Uuid,
    patch: ItemPatch,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = backend.persist_item_update(id, &patch).await {
            warn!(item_id = %id, error = %e, "item update persistence failed");
        }
    })
}

/// Fire-and-forget item delete.
pub fn spawn_item_delete<B: PersistBackend + 'static>(
    backend: Arc<B>,
    id: Uuid,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = backend.persist_item_delete(id).await {
            warn!(item_id = %id, error = %e, "item delete persistence failed");
        }
    })
}
