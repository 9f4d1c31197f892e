pub mod event_queries;
pub mod unmapped_event_queries;
