use std::marker::PhantomData;
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use uuid::Uuid;

use backend_domain::{
    EquipmentEvent, Event, EventRecord, OperationsEvent, RouterFields, ShipmentEvent,
    TransportEvent, TypedEvent, TypedEventService,
};

use crate::repositories::{EventTable, RelatedEntityTable, Relations};

/// One event variant's view over the shared event table.
pub struct InMemoryVariantService<P> {
    table: Arc<EventTable>,
    related: Arc<RelatedEntityTable>,
    _payload: PhantomData<fn() -> P>,
}

impl<P> InMemoryVariantService<P> {
    pub fn new(table: Arc<EventTable>, related: Arc<RelatedEntityTable>) -> Self {
        Self {
            table,
            related,
            _payload: PhantomData,
        }
    }
}

pub type InMemoryShipmentEventService = InMemoryVariantService<ShipmentEvent>;
pub type InMemoryTransportEventService = InMemoryVariantService<TransportEvent>;
pub type InMemoryEquipmentEventService = InMemoryVariantService<EquipmentEvent>;
pub type InMemoryOperationsEventService = InMemoryVariantService<OperationsEvent>;

#[async_trait]
impl<P: Relations> TypedEventService for InMemoryVariantService<P> {
    type Payload = P;

    async fn create(&self, mut event: TypedEvent<P>) -> anyhow::Result<TypedEvent<P>> {
        event.record.payload.detach();
        let event_id = event.record.event_id;
        if !self.table.insert(event.clone().into_event()).await {
            return Err(anyhow!("event {} already exists", event_id));
        }
        Ok(event)
    }

    async fn update(&self, mut record: EventRecord<P>) -> anyhow::Result<Option<EventRecord<P>>> {
        record.payload.detach();
        let event_id = record.event_id;
        let Some(existing) = self.table.get(event_id).await else {
            return Ok(None);
        };
        if existing.event_type != Some(P::EVENT_TYPE) {
            return Ok(None);
        }

        // Router-owned columns stay as stored.
        let router = RouterFields {
            event_type: existing.event_type,
            carrier_booking_reference: existing.carrier_booking_reference,
        };
        let replacement = Event::from_record(router, record.clone().map(P::into_payload));
        let updated = self
            .table
            .modify(event_id, |row| *row = replacement)
            .await;
        Ok(updated.map(|_| record))
    }

    async fn find_by_id(&self, event_id: Uuid) -> anyhow::Result<Option<TypedEvent<P>>> {
        let Some(event) = self.table.get(event_id).await else {
            return Ok(None);
        };
        Ok(TypedEvent::<P>::try_from_event(event).ok())
    }

    async fn load_related_entities(
        &self,
        mut record: EventRecord<P>,
    ) -> anyhow::Result<EventRecord<P>> {
        let related = self.related.read().await;
        record.payload.attach(&related);
        Ok(record)
    }
}
