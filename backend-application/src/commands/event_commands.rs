use tracing::{error, info, warn};
use uuid::Uuid;

use crate::dtos::EventBody;
use crate::{AppError, AppState};

pub async fn create_event(state: &AppState, body: EventBody) -> Result<EventBody, AppError> {
    let event = body.into_event().inspect_err(|_| state.metrics.record_rejected())?;
    let stored = state
        .dispatcher
        .create(event)
        .await
        .inspect_err(|err| log_failure(state, "create", err))?;
    info!(
        event_id = %stored.event_id,
        event_type = ?stored.event_type,
        "event created"
    );
    state.metrics.record_created();
    EventBody::from_event(stored)
}

/// The id in the path wins over any id carried in the body.
pub async fn update_event(
    state: &AppState,
    event_id: Uuid,
    body: EventBody,
) -> Result<EventBody, AppError> {
    let mut event = body.into_event().inspect_err(|_| state.metrics.record_rejected())?;
    event.event_id = event_id;
    let updated = state
        .dispatcher
        .update(event)
        .await
        .inspect_err(|err| log_failure(state, "update", err))?;
    info!(
        event_id = %updated.event_id,
        event_type = ?updated.event_type,
        "event updated"
    );
    state.metrics.record_updated();
    EventBody::from_event(updated)
}

fn log_failure(state: &AppState, operation: &str, err: &AppError) {
    match err {
        AppError::Validation(message) => {
            state.metrics.record_rejected();
            warn!("rejected event {}: {}", operation, message);
        }
        AppError::NotFound(message) => warn!("event {} missed: {}", operation, message),
        AppError::InvariantViolation(_) => {}
        AppError::Internal(err) => error!("event {} failed: {}", operation, err),
    }
}
