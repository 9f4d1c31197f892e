use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use backend_domain::{UnmappedEvent, UnmappedEventRepository};

/// Queue entries in enqueue order; re-saving an id moves it to the back.
#[derive(Default)]
pub struct InMemoryUnmappedEventRepository {
    entries: RwLock<IndexMap<Uuid, UnmappedEvent>>,
}

impl InMemoryUnmappedEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UnmappedEventRepository for InMemoryUnmappedEventRepository {
    async fn save(&self, entry: UnmappedEvent) -> anyhow::Result<UnmappedEvent> {
        let mut entries = self.entries.write().await;
        entries.shift_remove(&entry.event_id);
        entries.insert(entry.event_id, entry.clone());
        Ok(entry)
    }

    async fn find_by_event_id(&self, event_id: Uuid) -> anyhow::Result<Option<UnmappedEvent>> {
        Ok(self.entries.read().await.get(&event_id).cloned())
    }

    async fn list(&self, limit: usize) -> anyhow::Result<Vec<UnmappedEvent>> {
        Ok(self
            .entries
            .read()
            .await
            .values()
            .take(limit)
            .cloned()
            .collect())
    }
}
