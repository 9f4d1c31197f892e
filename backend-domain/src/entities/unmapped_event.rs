// Reconciliation queue entry
// Written on every update, drained by the downstream reconciliation process

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmappedEvent {
    pub event_id: Uuid,
    pub is_new_record: bool,
    pub enqueued_at_date_time: DateTime<Utc>,
}

impl UnmappedEvent {
    pub fn updated(event_id: Uuid, enqueued_at_date_time: DateTime<Utc>) -> Self {
        Self {
            event_id,
            is_new_record: false,
            enqueued_at_date_time,
        }
    }
}
