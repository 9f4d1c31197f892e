use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Event, EventQuery, UnmappedEvent};

#[async_trait]
pub trait EventStore: Send + Sync {
    async fn create(&self, event: Event) -> anyhow::Result<Event>;
    async fn find_by_id(&self, event_id: Uuid) -> anyhow::Result<Option<Event>>;
    async fn find_all(&self, query: &EventQuery) -> anyhow::Result<Vec<Event>>;
    async fn ping(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait UnmappedEventRepository: Send + Sync {
    /// Replaces any entry already queued for the same event id.
    async fn save(&self, entry: UnmappedEvent) -> anyhow::Result<UnmappedEvent>;
    async fn find_by_event_id(&self, event_id: Uuid) -> anyhow::Result<Option<UnmappedEvent>>;
    async fn list(&self, limit: usize) -> anyhow::Result<Vec<UnmappedEvent>>;
}
