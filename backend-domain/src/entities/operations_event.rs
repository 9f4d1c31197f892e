// Operations event payload, never enriched

use serde::{Deserialize, Serialize};

use crate::entities::{EventPayload, VariantPayload};
use crate::value_objects::{EventType, OperationsEventTypeCode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationsEvent {
    pub operations_event_type_code: OperationsEventTypeCode,
    pub publisher: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_call_service_type_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_type_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_call_id: Option<String>,
}

impl VariantPayload for OperationsEvent {
    const EVENT_TYPE: EventType = EventType::OPERATIONS;

    fn into_payload(self) -> EventPayload {
        EventPayload::Operations(self)
    }

    fn from_payload(payload: EventPayload) -> Result<Self, EventPayload> {
        match payload {
            EventPayload::Operations(event) => Ok(event),
            other => Err(other),
        }
    }
}
