pub mod event_store;
pub mod event_table;
pub mod related_entities;
pub mod seed_file;
pub mod unmapped_events;

pub use event_store::*;
pub use event_table::*;
pub use related_entities::*;
pub use seed_file::*;
pub use unmapped_events::*;
