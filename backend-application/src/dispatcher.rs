use std::sync::Arc;

use tracing::{debug, error};
use uuid::Uuid;

use backend_domain::ports::{
    EquipmentEventService, EventStore, OperationsEventService, ShipmentEventService,
    TransportEventService, TypedEventService, UnmappedEventRepository,
};
use backend_domain::{
    Event, EventPayload, EventQuery, EventRecord, EventType, TypedEvent, UnmappedEvent,
    VariantPayload,
};

use crate::{AppError, Metrics};

/// Collaborators the dispatcher routes to.
#[derive(Clone)]
pub struct EventPorts {
    pub event_store: Arc<dyn EventStore>,
    pub shipment: Arc<ShipmentEventService>,
    pub transport: Arc<TransportEventService>,
    pub equipment: Arc<EquipmentEventService>,
    pub operations: Arc<OperationsEventService>,
    pub unmapped_events: Arc<dyn UnmappedEventRepository>,
}

/// Uniform create/update/find surface over every event variant.
///
/// Holds no state of its own beyond handles to the stores; every call is a
/// chain of awaited port calls.
#[derive(Clone)]
pub struct EventDispatcher {
    ports: EventPorts,
    supported_events: Vec<EventType>,
    metrics: Arc<Metrics>,
}

impl EventDispatcher {
    pub fn new(ports: EventPorts, supported_events: Vec<EventType>) -> Self {
        Self {
            ports,
            supported_events,
            metrics: Arc::new(Metrics::default()),
        }
    }

    /// Shares the counters rendered by the metrics endpoint.
    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }

    pub fn supported_events(&self) -> &[EventType] {
        &self.supported_events
    }

    /// Persists through the generic store. Does not enqueue for reconciliation.
    pub async fn create(&self, mut event: Event) -> Result<Event, AppError> {
        event.created_or_now();
        let Some(event_type) = event.event_type else {
            return Err(AppError::Validation("event type is required".to_string()));
        };
        let payload_type = event.payload.event_type();
        if event_type != payload_type {
            return Err(AppError::Validation(format!(
                "event type {} does not match a {} payload",
                event_type, payload_type
            )));
        }

        debug!(event_id = %event.event_id, %event_type, "creating event");
        let stored = self.ports.event_store.create(event).await?;
        Ok(stored)
    }

    /// Updates through the typed service for the event's discriminant and
    /// queues the event for reconciliation. Returns the caller's event.
    pub async fn update(&self, mut event: Event) -> Result<Event, AppError> {
        event.created_or_now();
        let event_type = self.ensure_supported(event.event_type)?;

        debug!(event_id = %event.event_id, %event_type, "updating event");
        let (router, record) = event.clone().split();
        let (head, payload) = record.into_parts();
        if payload.event_type() != event_type {
            error!(
                event_id = %head.event_id,
                %event_type,
                payload_type = %payload.event_type(),
                "discriminant does not match payload"
            );
            return Err(AppError::InvariantViolation(format!(
                "unexpected value: {} carrying a {} payload",
                event_type,
                payload.event_type()
            )));
        }

        let stored = match payload {
            EventPayload::Shipment(p) => {
                update_variant(self.ports.shipment.as_ref(), head, p).await?
            }
            EventPayload::Transport(p) => {
                update_variant(self.ports.transport.as_ref(), head, p).await?
            }
            EventPayload::Equipment(p) => {
                update_variant(self.ports.equipment.as_ref(), head, p).await?
            }
            EventPayload::Operations(p) => {
                update_variant(self.ports.operations.as_ref(), head, p).await?
            }
        };
        let enqueued_at = stored.event_created_date_time;
        let restored = Event::from_record(router, stored);
        debug!(
            event_id = %restored.event_id,
            event_type = ?restored.event_type,
            carrier_booking_reference = ?restored.carrier_booking_reference,
            "stored event rejoined with router fields"
        );

        let entry = UnmappedEvent::updated(restored.event_id, enqueued_at);
        self.ports.unmapped_events.save(entry).await?;
        self.metrics.record_enqueued();
        debug!(event_id = %restored.event_id, "queued event for reconciliation");

        Ok(event)
    }

    /// Resolves the id as a transport, then shipment, then equipment event.
    pub async fn find_by_id(&self, event_id: Uuid) -> Result<Event, AppError> {
        if let Some(event) = resolve(self.ports.transport.as_ref(), event_id).await? {
            return Ok(event);
        }
        if let Some(event) = resolve(self.ports.shipment.as_ref(), event_id).await? {
            return Ok(event);
        }
        if let Some(event) = resolve(self.ports.equipment.as_ref(), event_id).await? {
            return Ok(event);
        }
        Err(AppError::NotFound(format!(
            "No event was found with id: {}",
            event_id
        )))
    }

    /// Runs the generic query and attaches related entities item by item,
    /// keeping the store's ordering.
    pub async fn find_all_extended(&self, query: &EventQuery) -> Result<Vec<Event>, AppError> {
        let events = self.ports.event_store.find_all(query).await?;
        let mut extended = Vec::with_capacity(events.len());
        for event in events {
            extended.push(self.load_related_entities(event).await?);
        }
        Ok(extended)
    }

    async fn load_related_entities(&self, event: Event) -> Result<Event, AppError> {
        if !event.type_matches_payload() {
            return Ok(event);
        }
        let (router, record) = event.split();
        let (head, payload) = record.into_parts();
        let record = match payload {
            EventPayload::Transport(p) => enrich(self.ports.transport.as_ref(), head, p).await?,
            EventPayload::Equipment(p) => enrich(self.ports.equipment.as_ref(), head, p).await?,
            EventPayload::Shipment(p) => enrich(self.ports.shipment.as_ref(), head, p).await?,
            EventPayload::Operations(p) => head.with_payload(EventPayload::Operations(p)),
        };
        Ok(Event::from_record(router, record))
    }

    fn ensure_supported(&self, event_type: Option<EventType>) -> Result<EventType, AppError> {
        match event_type {
            Some(event_type) if self.supported_events.contains(&event_type) => Ok(event_type),
            Some(event_type) => Err(AppError::Validation(format!(
                "unsupported event type: {}",
                event_type
            ))),
            None => Err(AppError::Validation(
                "unsupported event type: none".to_string(),
            )),
        }
    }
}

async fn update_variant<P: VariantPayload>(
    service: &dyn TypedEventService<Payload = P>,
    head: EventRecord<()>,
    payload: P,
) -> Result<EventRecord<EventPayload>, AppError> {
    let event_id = head.event_id;
    let updated = service.update(head.with_payload(payload)).await?;
    updated
        .map(|record| record.map(P::into_payload))
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No {} event was found with id: {}",
                P::EVENT_TYPE,
                event_id
            ))
        })
}

async fn resolve<P: VariantPayload>(
    service: &dyn TypedEventService<Payload = P>,
    event_id: Uuid,
) -> Result<Option<Event>, AppError> {
    let Some(found) = service.find_by_id(event_id).await? else {
        return Ok(None);
    };
    let record = service.load_related_entities(found.record).await?;
    let found = TypedEvent {
        carrier_booking_reference: found.carrier_booking_reference,
        record,
    };
    Ok(Some(found.into_event()))
}

async fn enrich<P: VariantPayload>(
    service: &dyn TypedEventService<Payload = P>,
    head: EventRecord<()>,
    payload: P,
) -> Result<EventRecord<EventPayload>, AppError> {
    let record = service
        .load_related_entities(head.with_payload(payload))
        .await?;
    Ok(record.map(P::into_payload))
}
