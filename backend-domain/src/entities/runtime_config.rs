// Runtime configuration shared by the application and interface layers

use serde::{Deserialize, Serialize};

use crate::value_objects::EventType;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub supported_event_types: Vec<EventType>,
    pub seed_path: Option<String>,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub default_page_limit: usize,
    pub max_page_limit: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3240".to_string(),
            supported_event_types: EventType::ALL.to_vec(),
            seed_path: None,
            max_body_bytes: 2 * 1024 * 1024,
            request_timeout_seconds: 15,
            default_page_limit: 100,
            max_page_limit: 1000,
        }
    }
}
