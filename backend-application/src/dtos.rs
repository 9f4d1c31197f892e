// Wire shapes for events: common columns plus the variant fields flattened in

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use backend_domain::{
    EquipmentEvent, Event, EventClassifierCode, EventPayload, EventQuery, EventType,
    OperationsEvent, RuntimeConfig, ShipmentEvent, TransportEvent,
};

use crate::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBody {
    #[serde(default, rename = "eventID", skip_serializing_if = "Option::is_none")]
    pub event_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_created_date_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_classifier_code: Option<EventClassifierCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier_booking_reference: Option<String>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl EventBody {
    /// Parses the discriminant and reads the variant fields that go with it.
    pub fn into_event(self) -> Result<Event, AppError> {
        let raw_type = self
            .event_type
            .ok_or_else(|| AppError::Validation("eventType is required".to_string()))?;
        let event_type: EventType = raw_type
            .parse()
            .map_err(|err| AppError::Validation(format!("unsupported event type: {}", err)))?;

        let details = Value::Object(self.details);
        let payload = match event_type {
            EventType::SHIPMENT => {
                serde_json::from_value::<ShipmentEvent>(details).map(EventPayload::Shipment)
            }
            EventType::TRANSPORT => {
                serde_json::from_value::<TransportEvent>(details).map(EventPayload::Transport)
            }
            EventType::EQUIPMENT => {
                serde_json::from_value::<EquipmentEvent>(details).map(EventPayload::Equipment)
            }
            EventType::OPERATIONS => {
                serde_json::from_value::<OperationsEvent>(details).map(EventPayload::Operations)
            }
        }
        .map_err(|err| AppError::Validation(format!("invalid {} event: {}", event_type, err)))?;

        Ok(Event {
            event_id: self.event_id.unwrap_or_else(Uuid::new_v4),
            event_type: Some(event_type),
            event_created_date_time: self.event_created_date_time,
            event_date_time: self.event_date_time,
            event_classifier_code: self.event_classifier_code,
            carrier_booking_reference: self.carrier_booking_reference,
            payload,
        })
    }

    pub fn from_event(event: Event) -> Result<Self, AppError> {
        let details = match event.payload {
            EventPayload::Shipment(p) => serde_json::to_value(p),
            EventPayload::Transport(p) => serde_json::to_value(p),
            EventPayload::Equipment(p) => serde_json::to_value(p),
            EventPayload::Operations(p) => serde_json::to_value(p),
        }
        .map_err(|err| AppError::Internal(anyhow::anyhow!("serialize event failed: {err}")))?;
        let details = match details {
            Value::Object(map) => map,
            other => {
                return Err(AppError::Internal(anyhow::anyhow!(
                    "event payload serialized to {other}, expected an object"
                )))
            }
        };

        Ok(Self {
            event_id: Some(event.event_id),
            event_type: event.event_type.map(|t| t.as_str().to_string()),
            event_created_date_time: event.event_created_date_time,
            event_date_time: event.event_date_time,
            event_classifier_code: event.event_classifier_code,
            carrier_booking_reference: event.carrier_booking_reference,
            details,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListQuery {
    pub event_type: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl EventListQuery {
    pub fn to_event_query(&self, config: &RuntimeConfig) -> Result<EventQuery, AppError> {
        let event_type = match self.event_type.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<EventType>()
                    .map_err(|err| AppError::Validation(err.to_string()))?,
            ),
        };
        let limit = self
            .limit
            .unwrap_or(config.default_page_limit)
            .clamp(1, config.max_page_limit.max(1));
        Ok(EventQuery {
            event_type,
            limit: Some(limit),
            offset: self.offset.unwrap_or(0),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnmappedEventListQuery {
    pub limit: Option<usize>,
}
