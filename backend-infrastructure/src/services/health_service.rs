use std::sync::Arc;

use async_trait::async_trait;
use backend_domain::ports::HealthCheckService;
use backend_domain::EventStore;

pub struct DefaultHealthService {
    event_store: Arc<dyn EventStore>,
}

impl DefaultHealthService {
    pub fn new(event_store: Arc<dyn EventStore>) -> Self {
        Self { event_store }
    }
}

#[async_trait]
impl HealthCheckService for DefaultHealthService {
    async fn check_event_store(&self) -> anyhow::Result<bool> {
        self.event_store.ping().await.map(|_| true)
    }
}
