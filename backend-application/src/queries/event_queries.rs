use tracing::error;
use uuid::Uuid;

use crate::dtos::{EventBody, EventListQuery};
use crate::{AppError, AppState};

pub async fn get_event(state: &AppState, event_id: Uuid) -> Result<EventBody, AppError> {
    let event = state.dispatcher.find_by_id(event_id).await?;
    EventBody::from_event(event)
}

pub async fn list_events(
    state: &AppState,
    query: EventListQuery,
) -> Result<Vec<EventBody>, AppError> {
    let query = query.to_event_query(&state.config)?;
    let events = state
        .dispatcher
        .find_all_extended(&query)
        .await
        .inspect_err(|err| error!("failed to list events: {}", err))?;
    events.into_iter().map(EventBody::from_event).collect()
}
