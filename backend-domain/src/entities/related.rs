// Related entities attached to events on enriched reads

use serde::{Deserialize, Serialize};

use crate::value_objects::ModeOfTransport;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vessel {
    #[serde(rename = "vesselIMONumber")]
    pub vessel_imo_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vessel_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vessel_flag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportCall {
    pub transport_call_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_call_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub un_location_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_code: Option<String>,
    pub mode_of_transport: ModeOfTransport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vessel: Option<Vessel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub reference_type: String,
    pub reference_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seal {
    pub seal_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seal_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seal_type: Option<String>,
}
