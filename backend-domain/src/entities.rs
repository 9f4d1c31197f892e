// Domain entities

pub mod equipment_event;
pub mod event;
pub mod operations_event;
pub mod query;
pub mod related;
pub mod runtime_config;
pub mod shipment_event;
pub mod transport_event;
pub mod unmapped_event;

pub use equipment_event::*;
pub use event::*;
pub use operations_event::*;
pub use query::*;
pub use related::*;
pub use runtime_config::*;
pub use shipment_event::*;
pub use transport_event::*;
pub use unmapped_event::*;
