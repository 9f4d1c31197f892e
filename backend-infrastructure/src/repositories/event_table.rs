use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use backend_domain::{Event, EventQuery};

/// Insertion-ordered event rows shared by the generic store and the typed services.
#[derive(Default)]
pub struct EventTable {
    rows: RwLock<IndexMap<Uuid, Event>>,
}

impl EventTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new row; returns false when the id is taken.
    pub async fn insert(&self, event: Event) -> bool {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&event.event_id) {
            return false;
        }
        rows.insert(event.event_id, event);
        true
    }

    pub async fn get(&self, event_id: Uuid) -> Option<Event> {
        self.rows.read().await.get(&event_id).cloned()
    }

    /// Applies `change` to the row in place, keeping its position.
    pub async fn modify<F>(&self, event_id: Uuid, change: F) -> Option<Event>
    where
        F: FnOnce(&mut Event),
    {
        let mut rows = self.rows.write().await;
        let row = rows.get_mut(&event_id)?;
        change(row);
        Some(row.clone())
    }

    pub async fn scan(&self, query: &EventQuery) -> Vec<Event> {
        let rows = self.rows.read().await;
        rows.values()
            .filter(|event| query.event_type.is_none() || event.event_type == query.event_type)
            .skip(query.offset)
            .take(query.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
