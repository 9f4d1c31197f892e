// Transport event payload

use serde::{Deserialize, Serialize};

use crate::entities::{EventPayload, TransportCall, VariantPayload};
use crate::value_objects::{EventType, TransportEventTypeCode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportEvent {
    pub transport_event_type_code: TransportEventTypeCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_reason_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_call_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_call: Option<TransportCall>,
}

impl VariantPayload for TransportEvent {
    const EVENT_TYPE: EventType = EventType::TRANSPORT;

    fn into_payload(self) -> EventPayload {
        EventPayload::Transport(self)
    }

    fn from_payload(payload: EventPayload) -> Result<Self, EventPayload> {
        match payload {
            EventPayload::Transport(event) => Ok(event),
            other => Err(other),
        }
    }
}
