pub mod health_service;
pub mod typed_event_services;

pub use health_service::*;
pub use typed_event_services::*;
