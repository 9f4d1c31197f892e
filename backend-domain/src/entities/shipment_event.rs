// Shipment event payload

use serde::{Deserialize, Serialize};

use crate::entities::{EventPayload, Reference, VariantPayload};
use crate::value_objects::{DocumentTypeCode, EventType, ShipmentEventTypeCode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentEvent {
    pub shipment_event_type_code: ShipmentEventTypeCode,
    pub document_type_code: DocumentTypeCode,
    #[serde(rename = "documentID")]
    pub document_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Filled in by relation loading only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<Reference>,
}

impl VariantPayload for ShipmentEvent {
    const EVENT_TYPE: EventType = EventType::SHIPMENT;

    fn into_payload(self) -> EventPayload {
        EventPayload::Shipment(self)
    }

    fn from_payload(payload: EventPayload) -> Result<Self, EventPayload> {
        match payload {
            EventPayload::Shipment(event) => Ok(event),
            other => Err(other),
        }
    }
}
