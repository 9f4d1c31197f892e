use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use backend_application::{AppState, EventDispatcher, EventPorts, Metrics};
use backend_domain::{EventStore, UnmappedEventRepository};
use backend_infrastructure::{
    AppConfig, DefaultHealthService, EventTable, InMemoryEquipmentEventService,
    InMemoryEventStore, InMemoryOperationsEventService, InMemoryShipmentEventService,
    InMemoryTransportEventService, InMemoryUnmappedEventRepository, RelatedEntityTable,
    SeedFileRepository,
};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        Self::from_config(config).await
    }

    pub async fn from_config(config: AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config()?;

        let table = Arc::new(EventTable::new());
        let related = Arc::new(RelatedEntityTable::new());
        let event_store: Arc<dyn EventStore> = Arc::new(InMemoryEventStore::new(table.clone()));
        let unmapped_repo: Arc<dyn UnmappedEventRepository> =
            Arc::new(InMemoryUnmappedEventRepository::new());

        if let Some(seed_path) = &runtime_config.seed_path {
            let seeds = SeedFileRepository::new();
            let seed = seeds.load(seed_path).await?;
            seeds.apply(seed, event_store.as_ref(), &related).await?;
        }

        let ports = EventPorts {
            event_store: event_store.clone(),
            shipment: Arc::new(InMemoryShipmentEventService::new(
                table.clone(),
                related.clone(),
            )),
            transport: Arc::new(InMemoryTransportEventService::new(
                table.clone(),
                related.clone(),
            )),
            equipment: Arc::new(InMemoryEquipmentEventService::new(
                table.clone(),
                related.clone(),
            )),
            operations: Arc::new(InMemoryOperationsEventService::new(table, related)),
            unmapped_events: unmapped_repo.clone(),
        };
        let metrics = Arc::new(Metrics::default());
        let dispatcher = EventDispatcher::new(ports, runtime_config.supported_event_types.clone())
            .with_metrics(metrics.clone());
        let supported = dispatcher
            .supported_events()
            .iter()
            .map(|event_type| event_type.as_str())
            .collect::<Vec<_>>()
            .join(",");
        info!("event dispatcher ready, supported event types: {}", supported);

        let state = AppState {
            config: runtime_config,
            dispatcher,
            unmapped_repo,
            health_service: Arc::new(DefaultHealthService::new(event_store)),
            metrics,
        };

        Ok(Self { state })
    }
}
