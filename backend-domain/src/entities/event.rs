// Event entity
// A tracking event is a set of common columns plus exactly one variant payload

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{EquipmentEvent, OperationsEvent, ShipmentEvent, TransportEvent};
use crate::value_objects::{EventClassifierCode, EventType};

#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    Shipment(ShipmentEvent),
    Transport(TransportEvent),
    Equipment(EquipmentEvent),
    Operations(OperationsEvent),
}

impl EventPayload {
    /// The discriminant this payload belongs under.
    pub fn event_type(&self) -> EventType {
        match self {
            EventPayload::Shipment(_) => EventType::SHIPMENT,
            EventPayload::Transport(_) => EventType::TRANSPORT,
            EventPayload::Equipment(_) => EventType::EQUIPMENT,
            EventPayload::Operations(_) => EventType::OPERATIONS,
        }
    }
}

/// Conversion between a concrete payload and the [`EventPayload`] union.
pub trait VariantPayload: Clone + Send + Sync + 'static {
    const EVENT_TYPE: EventType;

    fn into_payload(self) -> EventPayload;

    /// Hands the payload back unchanged when it belongs to another variant.
    fn from_payload(payload: EventPayload) -> Result<Self, EventPayload>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub event_id: Uuid,
    pub event_type: Option<EventType>,
    pub event_created_date_time: Option<DateTime<Utc>>,
    pub event_date_time: Option<DateTime<Utc>>,
    pub event_classifier_code: Option<EventClassifierCode>,
    pub carrier_booking_reference: Option<String>,
    pub payload: EventPayload,
}

impl Event {
    /// New event with a fresh id and the discriminant taken from the payload.
    pub fn new(payload: EventPayload) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            event_type: Some(payload.event_type()),
            event_created_date_time: None,
            event_date_time: None,
            event_classifier_code: None,
            carrier_booking_reference: None,
            payload,
        }
    }

    /// Returns the creation timestamp, stamping it with the current time first if unset.
    pub fn created_or_now(&mut self) -> DateTime<Utc> {
        *self.event_created_date_time.get_or_insert_with(Utc::now)
    }

    pub fn type_matches_payload(&self) -> bool {
        self.event_type == Some(self.payload.event_type())
    }

    /// Separates the router-owned columns from the part typed services see.
    pub fn split(mut self) -> (RouterFields, EventRecord<EventPayload>) {
        let event_created_date_time = self.created_or_now();
        let router = RouterFields {
            event_type: self.event_type,
            carrier_booking_reference: self.carrier_booking_reference,
        };
        let record = EventRecord {
            event_id: self.event_id,
            event_created_date_time,
            event_date_time: self.event_date_time,
            event_classifier_code: self.event_classifier_code,
            payload: self.payload,
        };
        (router, record)
    }

    pub fn from_record(router: RouterFields, record: EventRecord<EventPayload>) -> Self {
        Self {
            event_id: record.event_id,
            event_type: router.event_type,
            event_created_date_time: Some(record.event_created_date_time),
            event_date_time: record.event_date_time,
            event_classifier_code: record.event_classifier_code,
            carrier_booking_reference: router.carrier_booking_reference,
            payload: record.payload,
        }
    }
}

/// Columns owned by the dispatcher and never written by typed services.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouterFields {
    pub event_type: Option<EventType>,
    pub carrier_booking_reference: Option<String>,
}

/// An event without its router-owned columns.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord<P> {
    pub event_id: Uuid,
    pub event_created_date_time: DateTime<Utc>,
    pub event_date_time: Option<DateTime<Utc>>,
    pub event_classifier_code: Option<EventClassifierCode>,
    pub payload: P,
}

impl<P> EventRecord<P> {
    pub fn map<Q>(self, f: impl FnOnce(P) -> Q) -> EventRecord<Q> {
        let (head, payload) = self.into_parts();
        head.with_payload(f(payload))
    }

    pub fn into_parts(self) -> (EventRecord<()>, P) {
        let head = EventRecord {
            event_id: self.event_id,
            event_created_date_time: self.event_created_date_time,
            event_date_time: self.event_date_time,
            event_classifier_code: self.event_classifier_code,
            payload: (),
        };
        (head, self.payload)
    }
}

impl EventRecord<()> {
    pub fn with_payload<P>(self, payload: P) -> EventRecord<P> {
        EventRecord {
            event_id: self.event_id,
            event_created_date_time: self.event_created_date_time,
            event_date_time: self.event_date_time,
            event_classifier_code: self.event_classifier_code,
            payload,
        }
    }
}

/// A stored event of one variant as a typed service returns it.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedEvent<P> {
    pub carrier_booking_reference: Option<String>,
    pub record: EventRecord<P>,
}

impl<P: VariantPayload> TypedEvent<P> {
    pub fn into_event(self) -> Event {
        let router = RouterFields {
            event_type: Some(P::EVENT_TYPE),
            carrier_booking_reference: self.carrier_booking_reference,
        };
        Event::from_record(router, self.record.map(P::into_payload))
    }

    /// Narrows a generic event to this variant; the event comes back untouched on mismatch.
    pub fn try_from_event(event: Event) -> Result<Self, Event> {
        if event.event_type != Some(P::EVENT_TYPE) {
            return Err(event);
        }
        let (router, record) = event.split();
        let (head, payload) = record.into_parts();
        match P::from_payload(payload) {
            Ok(payload) => Ok(Self {
                carrier_booking_reference: router.carrier_booking_reference,
                record: head.with_payload(payload),
            }),
            Err(payload) => Err(Event::from_record(router, head.with_payload(payload))),
        }
    }
}
