// Equipment event payload

use serde::{Deserialize, Serialize};

use crate::entities::{EventPayload, Seal, TransportCall, VariantPayload};
use crate::value_objects::{EmptyIndicatorCode, EquipmentEventTypeCode, EventType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentEvent {
    pub equipment_event_type_code: EquipmentEventTypeCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_reference: Option<String>,
    pub empty_indicator_code: EmptyIndicatorCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_call_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_call: Option<TransportCall>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub seals: Vec<Seal>,
}

impl VariantPayload for EquipmentEvent {
    const EVENT_TYPE: EventType = EventType::EQUIPMENT;

    fn into_payload(self) -> EventPayload {
        EventPayload::Equipment(self)
    }

    fn from_payload(payload: EventPayload) -> Result<Self, EventPayload> {
        match payload {
            EventPayload::Equipment(event) => Ok(event),
            other => Err(other),
        }
    }
}
