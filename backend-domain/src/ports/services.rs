use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{
    EquipmentEvent, EventRecord, OperationsEvent, ShipmentEvent, TransportEvent, TypedEvent,
    VariantPayload,
};

/// Persistence and relation loading for a single event variant.
#[async_trait]
pub trait TypedEventService: Send + Sync {
    type Payload: VariantPayload;

    async fn create(
        &self,
        event: TypedEvent<Self::Payload>,
    ) -> anyhow::Result<TypedEvent<Self::Payload>>;

    /// Returns `None` when no event of this variant has the record's id.
    async fn update(
        &self,
        record: EventRecord<Self::Payload>,
    ) -> anyhow::Result<Option<EventRecord<Self::Payload>>>;

    async fn find_by_id(&self, event_id: Uuid)
        -> anyhow::Result<Option<TypedEvent<Self::Payload>>>;

    async fn load_related_entities(
        &self,
        record: EventRecord<Self::Payload>,
    ) -> anyhow::Result<EventRecord<Self::Payload>>;
}

pub type ShipmentEventService = dyn TypedEventService<Payload = ShipmentEvent>;
pub type TransportEventService = dyn TypedEventService<Payload = TransportEvent>;
pub type EquipmentEventService = dyn TypedEventService<Payload = EquipmentEvent>;
pub type OperationsEventService = dyn TypedEventService<Payload = OperationsEvent>;

#[async_trait]
pub trait HealthCheckService: Send + Sync {
    async fn check_event_store(&self) -> anyhow::Result<bool>;
}
