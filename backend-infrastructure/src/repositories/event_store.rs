use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use uuid::Uuid;

use backend_domain::{Event, EventQuery, EventStore};

use crate::repositories::{detach_relations, EventTable};

pub struct InMemoryEventStore {
    table: Arc<EventTable>,
}

impl InMemoryEventStore {
    pub fn new(table: Arc<EventTable>) -> Self {
        Self { table }
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn create(&self, mut event: Event) -> anyhow::Result<Event> {
        detach_relations(&mut event.payload);
        if !self.table.insert(event.clone()).await {
            return Err(anyhow!("event {} already exists", event.event_id));
        }
        Ok(event)
    }

    async fn find_by_id(&self, event_id: Uuid) -> anyhow::Result<Option<Event>> {
        Ok(self.table.get(event_id).await)
    }

    async fn find_all(&self, query: &EventQuery) -> anyhow::Result<Vec<Event>> {
        Ok(self.table.scan(query).await)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
