use std::collections::HashMap;

use tokio::sync::{RwLock, RwLockReadGuard};

use backend_domain::{
    EquipmentEvent, EventPayload, OperationsEvent, Reference, Seal, ShipmentEvent, TransportCall,
    TransportEvent, VariantPayload,
};

#[derive(Debug, Default)]
pub struct RelatedEntities {
    transport_calls: HashMap<String, TransportCall>,
    references_by_document: HashMap<String, Vec<Reference>>,
    seals_by_equipment: HashMap<String, Vec<Seal>>,
}

impl RelatedEntities {
    pub fn transport_call(&self, transport_call_id: Option<&str>) -> Option<TransportCall> {
        transport_call_id.and_then(|id| self.transport_calls.get(id).cloned())
    }

    pub fn references(&self, document_id: &str) -> Vec<Reference> {
        self.references_by_document
            .get(document_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn seals(&self, equipment_reference: Option<&str>) -> Vec<Seal> {
        equipment_reference
            .and_then(|reference| self.seals_by_equipment.get(reference).cloned())
            .unwrap_or_default()
    }
}

#[derive(Default)]
pub struct RelatedEntityTable {
    inner: RwLock<RelatedEntities>,
}

impl RelatedEntityTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, RelatedEntities> {
        self.inner.read().await
    }

    pub async fn put_transport_call(&self, transport_call: TransportCall) {
        let mut inner = self.inner.write().await;
        inner
            .transport_calls
            .insert(transport_call.transport_call_id.clone(), transport_call);
    }

    pub async fn add_reference(&self, document_id: &str, reference: Reference) {
        let mut inner = self.inner.write().await;
        inner
            .references_by_document
            .entry(document_id.to_string())
            .or_default()
            .push(reference);
    }

    pub async fn add_seal(&self, equipment_reference: &str, seal: Seal) {
        let mut inner = self.inner.write().await;
        inner
            .seals_by_equipment
            .entry(equipment_reference.to_string())
            .or_default()
            .push(seal);
    }
}

/// How a payload picks up and sheds its related entities.
pub trait Relations: VariantPayload {
    fn attach(&mut self, related: &RelatedEntities);

    /// Related entities are never persisted with the event row.
    fn detach(&mut self);
}

impl Relations for TransportEvent {
    fn attach(&mut self, related: &RelatedEntities) {
        self.transport_call = related.transport_call(self.transport_call_id.as_deref());
    }

    fn detach(&mut self) {
        self.transport_call = None;
    }
}

impl Relations for EquipmentEvent {
    fn attach(&mut self, related: &RelatedEntities) {
        self.transport_call = related.transport_call(self.transport_call_id.as_deref());
        self.seals = related.seals(self.equipment_reference.as_deref());
    }

    fn detach(&mut self) {
        self.transport_call = None;
        self.seals.clear();
    }
}

impl Relations for ShipmentEvent {
    fn attach(&mut self, related: &RelatedEntities) {
        self.references = related.references(&self.document_id);
    }

    fn detach(&mut self) {
        self.references.clear();
    }
}

impl Relations for OperationsEvent {
    fn attach(&mut self, _related: &RelatedEntities) {}

    fn detach(&mut self) {}
}

pub fn detach_relations(payload: &mut EventPayload) {
    match payload {
        EventPayload::Shipment(p) => p.detach(),
        EventPayload::Transport(p) => p.detach(),
        EventPayload::Equipment(p) => p.detach(),
        EventPayload::Operations(p) => p.detach(),
    }
}
