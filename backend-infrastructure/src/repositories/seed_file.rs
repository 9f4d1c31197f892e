use std::path::Path;

use serde::Deserialize;
use tokio::fs;
use tracing::{info, warn};

use backend_application::dtos::EventBody;
use backend_domain::{EventStore, Reference, Seal, TransportCall};

use crate::repositories::RelatedEntityTable;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedData {
    pub events: Vec<EventBody>,
    pub transport_calls: Vec<TransportCall>,
    pub references: Vec<DocumentReference>,
    pub seals: Vec<EquipmentSeal>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReference {
    #[serde(rename = "documentID")]
    pub document_id: String,
    #[serde(flatten)]
    pub reference: Reference,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentSeal {
    pub equipment_reference: String,
    #[serde(flatten)]
    pub seal: Seal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub events: usize,
    pub transport_calls: usize,
    pub references: usize,
    pub seals: usize,
}

pub struct SeedFileRepository;

impl SeedFileRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn load(&self, path: &str) -> anyhow::Result<SeedData> {
        if !Path::new(path).exists() {
            warn!("seed file {} not found, starting empty", path);
            return Ok(SeedData::default());
        }
        let content = fs::read_to_string(path).await?;
        let seed: SeedData = serde_json::from_str(&content)?;
        Ok(seed)
    }

    /// Writes seed rows straight into the stores, bypassing the dispatcher.
    pub async fn apply(
        &self,
        seed: SeedData,
        event_store: &dyn EventStore,
        related: &RelatedEntityTable,
    ) -> anyhow::Result<SeedSummary> {
        let summary = SeedSummary {
            events: seed.events.len(),
            transport_calls: seed.transport_calls.len(),
            references: seed.references.len(),
            seals: seed.seals.len(),
        };

        for transport_call in seed.transport_calls {
            related.put_transport_call(transport_call).await;
        }
        for row in seed.references {
            related.add_reference(&row.document_id, row.reference).await;
        }
        for row in seed.seals {
            related.add_seal(&row.equipment_reference, row.seal).await;
        }
        for body in seed.events {
            let mut event = body.into_event()?;
            event.created_or_now();
            event_store.create(event).await?;
        }

        info!(
            "seeded {} events, {} transport calls, {} references, {} seals",
            summary.events, summary.transport_calls, summary.references, summary.seals
        );
        Ok(summary)
    }
}

impl Default for SeedFileRepository {
    fn default() -> Self {
        Self::new()
    }
}
