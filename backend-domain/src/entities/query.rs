// Paged event query, interpreted by the event store

use crate::value_objects::EventType;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQuery {
    pub event_type: Option<EventType>,
    pub limit: Option<usize>,
    pub offset: usize,
}
