use std::sync::Arc;

use backend_domain::ports::{HealthCheckService, UnmappedEventRepository};
use backend_domain::RuntimeConfig;

use crate::{EventDispatcher, Metrics};

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub dispatcher: EventDispatcher,
    pub unmapped_repo: Arc<dyn UnmappedEventRepository>,
    pub health_service: Arc<dyn HealthCheckService>,
    pub metrics: Arc<Metrics>,
}
