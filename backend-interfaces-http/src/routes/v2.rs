use axum::Router;

use backend_application::AppState;

use crate::handlers::{event_handlers, ops_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v2/events",
            axum::routing::get(event_handlers::list_events).post(event_handlers::create_event),
        )
        .route(
            "/v2/events/:event_id",
            axum::routing::get(event_handlers::get_event).put(event_handlers::update_event),
        )
        .route(
            "/v2/ops/unmapped-events",
            axum::routing::get(ops_handlers::list_unmapped_events),
        )
        .route(
            "/v2/ops/health/live",
            axum::routing::get(ops_handlers::health_live),
        )
        .route(
            "/v2/ops/health/ready",
            axum::routing::get(ops_handlers::health_ready),
        )
        .route(
            "/v2/ops/metrics/prometheus",
            axum::routing::get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
