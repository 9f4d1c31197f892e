use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use tracing::error;
use uuid::Uuid;

use backend_application::commands::event_commands;
use backend_application::dtos::{EventBody, EventListQuery};
use backend_application::queries::event_queries;
use backend_application::AppState;

use crate::error::HttpError;
use crate::middleware::parse_event_body;

fn read_body(state: &AppState, headers: &HeaderMap, body: &[u8]) -> Result<EventBody, HttpError> {
    let limit = usize::try_from(state.config.max_body_bytes).unwrap_or(usize::MAX);
    parse_event_body(headers, body, limit).map_err(|err| {
        error!("failed to parse event body: {}", err);
        state.metrics.record_rejected();
        HttpError::from(err)
    })
}

pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: axum::body::Bytes,
) -> Result<(StatusCode, Json<EventBody>), HttpError> {
    let body = read_body(&state, &headers, &body)?;
    let created = event_commands::create_event(&state, body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    headers: HeaderMap,
    body: axum::body::Bytes,
) -> Result<Json<EventBody>, HttpError> {
    let body = read_body(&state, &headers, &body)?;
    let updated = event_commands::update_event(&state, event_id, body).await?;
    Ok(Json(updated))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<EventBody>, HttpError> {
    let event = event_queries::get_event(&state, event_id).await?;
    Ok(Json(event))
}

pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventListQuery>,
) -> Result<Json<Vec<EventBody>>, HttpError> {
    let events = event_queries::list_events(&state, query).await?;
    Ok(Json(events))
}
