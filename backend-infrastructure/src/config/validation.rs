use anyhow::{anyhow, Result};

use backend_domain::EventType;

/// Parses configured event type names, dropping duplicates but keeping order.
pub fn parse_event_types(values: &[String]) -> Result<Vec<EventType>> {
    let mut out = Vec::new();
    for value in values {
        let event_type: EventType = value
            .parse()
            .map_err(|err| anyhow!("invalid supported_event_types: {}", err))?;
        if !out.contains(&event_type) {
            out.push(event_type);
        }
    }
    if out.is_empty() {
        return Err(anyhow!("supported_event_types must not be empty"));
    }
    Ok(out)
}
