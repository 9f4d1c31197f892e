#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use backend_application::{EventDispatcher, EventPorts, Metrics};
use backend_domain::ports::{EventStore, TypedEventService, UnmappedEventRepository};
use backend_domain::{
    EmptyIndicatorCode, EquipmentEvent, EquipmentEventTypeCode, Event, EventPayload, EventQuery,
    EventRecord, EventType, ModeOfTransport, OperationsEvent, OperationsEventTypeCode, Reference,
    Seal, ShipmentEvent, ShipmentEventTypeCode, DocumentTypeCode, TransportCall, TransportEvent,
    TransportEventTypeCode, TypedEvent, UnmappedEvent, VariantPayload,
};

pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn calls(log: &CallLog) -> Vec<String> {
    log.lock().expect("call log").clone()
}

pub struct RecordingService<P> {
    name: &'static str,
    log: CallLog,
    rows: Mutex<HashMap<Uuid, TypedEvent<P>>>,
    enrich: fn(&mut P),
}

impl<P: VariantPayload> RecordingService<P> {
    pub fn new(log: CallLog, enrich: fn(&mut P)) -> Self {
        Self {
            name: P::EVENT_TYPE.as_str(),
            log,
            rows: Mutex::new(HashMap::new()),
            enrich,
        }
    }

    pub fn seed(&self, event: &Event) {
        let typed = TypedEvent::<P>::try_from_event(event.clone()).expect("seed variant");
        self.rows
            .lock()
            .expect("rows")
            .insert(typed.record.event_id, typed);
    }

    pub fn row(&self, event_id: Uuid) -> Option<TypedEvent<P>> {
        self.rows.lock().expect("rows").get(&event_id).cloned()
    }

    fn record(&self, call: &str) {
        self.log
            .lock()
            .expect("call log")
            .push(format!("{}.{}", self.name, call));
    }
}

#[async_trait]
impl<P: VariantPayload> TypedEventService for RecordingService<P> {
    type Payload = P;

    async fn create(&self, event: TypedEvent<P>) -> anyhow::Result<TypedEvent<P>> {
        self.record("create");
        self.rows
            .lock()
            .expect("rows")
            .insert(event.record.event_id, event.clone());
        Ok(event)
    }

    async fn update(&self, record: EventRecord<P>) -> anyhow::Result<Option<EventRecord<P>>> {
        self.record("update");
        let mut rows = self.rows.lock().expect("rows");
        let Some(existing) = rows.get_mut(&record.event_id) else {
            return Ok(None);
        };
        existing.record = record.clone();
        Ok(Some(record))
    }

    async fn find_by_id(&self, event_id: Uuid) -> anyhow::Result<Option<TypedEvent<P>>> {
        self.record("find_by_id");
        Ok(self.row(event_id))
    }

    async fn load_related_entities(&self, mut record: EventRecord<P>) -> anyhow::Result<EventRecord<P>> {
        self.record("load_related_entities");
        (self.enrich)(&mut record.payload);
        Ok(record)
    }
}

pub struct FakeEventStore {
    log: CallLog,
    rows: Mutex<Vec<Event>>,
}

impl FakeEventStore {
    pub fn rows(&self) -> Vec<Event> {
        self.rows.lock().expect("rows").clone()
    }

    pub fn seed(&self, event: &Event) {
        self.rows.lock().expect("rows").push(event.clone());
    }
}

#[async_trait]
impl EventStore for FakeEventStore {
    async fn create(&self, event: Event) -> anyhow::Result<Event> {
        self.log.lock().expect("call log").push("store.create".to_string());
        self.rows.lock().expect("rows").push(event.clone());
        Ok(event)
    }

    async fn find_by_id(&self, event_id: Uuid) -> anyhow::Result<Option<Event>> {
        Ok(self
            .rows()
            .into_iter()
            .find(|event| event.event_id == event_id))
    }

    async fn find_all(&self, query: &EventQuery) -> anyhow::Result<Vec<Event>> {
        self.log.lock().expect("call log").push("store.find_all".to_string());
        Ok(self
            .rows()
            .into_iter()
            .filter(|event| query.event_type.is_none() || event.event_type == query.event_type)
            .skip(query.offset)
            .take(query.limit.unwrap_or(usize::MAX))
            .collect())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

pub struct FakeUnmappedRepository {
    log: CallLog,
    entries: Mutex<HashMap<Uuid, UnmappedEvent>>,
    unavailable: AtomicBool,
}

impl FakeUnmappedRepository {
    /// Makes every later `save` fail.
    pub fn go_offline(&self) {
        self.unavailable.store(true, Ordering::SeqCst);
    }

    pub fn entries(&self) -> Vec<UnmappedEvent> {
        self.entries.lock().expect("entries").values().cloned().collect()
    }
}

#[async_trait]
impl UnmappedEventRepository for FakeUnmappedRepository {
    async fn save(&self, entry: UnmappedEvent) -> anyhow::Result<UnmappedEvent> {
        self.log.lock().expect("call log").push("queue.save".to_string());
        if self.unavailable.load(Ordering::SeqCst) {
            anyhow::bail!("reconciliation queue unavailable");
        }
        self.entries
            .lock()
            .expect("entries")
            .insert(entry.event_id, entry.clone());
        Ok(entry)
    }

    async fn find_by_event_id(&self, event_id: Uuid) -> anyhow::Result<Option<UnmappedEvent>> {
        Ok(self.entries.lock().expect("entries").get(&event_id).cloned())
    }

    async fn list(&self, limit: usize) -> anyhow::Result<Vec<UnmappedEvent>> {
        Ok(self.entries().into_iter().take(limit).collect())
    }
}

pub struct Harness {
    pub dispatcher: EventDispatcher,
    pub log: CallLog,
    pub store: Arc<FakeEventStore>,
    pub queue: Arc<FakeUnmappedRepository>,
    pub metrics: Arc<Metrics>,
    pub shipment: Arc<RecordingService<ShipmentEvent>>,
    pub transport: Arc<RecordingService<TransportEvent>>,
    pub equipment: Arc<RecordingService<EquipmentEvent>>,
    pub operations: Arc<RecordingService<OperationsEvent>>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_supported(EventType::ALL.to_vec())
    }

    pub fn with_supported(supported: Vec<EventType>) -> Self {
        let log: CallLog = Arc::new(Mutex::new(Vec::new()));
        let store = Arc::new(FakeEventStore {
            log: log.clone(),
            rows: Mutex::new(Vec::new()),
        });
        let queue = Arc::new(FakeUnmappedRepository {
            log: log.clone(),
            entries: Mutex::new(HashMap::new()),
            unavailable: AtomicBool::new(false),
        });
        let shipment = Arc::new(RecordingService::<ShipmentEvent>::new(
            log.clone(),
            attach_references,
        ));
        let transport = Arc::new(RecordingService::<TransportEvent>::new(
            log.clone(),
            attach_transport_call,
        ));
        let equipment = Arc::new(RecordingService::<EquipmentEvent>::new(
            log.clone(),
            attach_seals,
        ));
        let operations = Arc::new(RecordingService::<OperationsEvent>::new(
            log.clone(),
            no_relations,
        ));

        let metrics = Arc::new(Metrics::default());
        let dispatcher = EventDispatcher::new(
            EventPorts {
                event_store: store.clone(),
                shipment: shipment.clone(),
                transport: transport.clone(),
                equipment: equipment.clone(),
                operations: operations.clone(),
                unmapped_events: queue.clone(),
            },
            supported,
        )
        .with_metrics(metrics.clone());

        Self {
            dispatcher,
            log,
            store,
            queue,
            metrics,
            shipment,
            transport,
            equipment,
            operations,
        }
    }

    pub fn calls(&self) -> Vec<String> {
        calls(&self.log)
    }

    pub fn clear_calls(&self) {
        self.log.lock().expect("call log").clear();
    }

    /// Seeds the event both in the generic store and in its typed service.
    pub fn seed(&self, event: &Event) {
        self.store.seed(event);
        match &event.payload {
            EventPayload::Shipment(_) => self.shipment.seed(event),
            EventPayload::Transport(_) => self.transport.seed(event),
            EventPayload::Equipment(_) => self.equipment.seed(event),
            EventPayload::Operations(_) => self.operations.seed(event),
        }
    }
}

fn no_relations(_: &mut OperationsEvent) {}

fn attach_references(event: &mut ShipmentEvent) {
    event.references = vec![Reference {
        reference_type: "FF".to_string(),
        reference_value: format!("ref-{}", event.document_id),
    }];
}

fn attach_transport_call(event: &mut TransportEvent) {
    event.transport_call = Some(sample_transport_call());
}

fn attach_seals(event: &mut EquipmentEvent) {
    event.seals = vec![Seal {
        seal_number: "SN-1".to_string(),
        seal_source: Some("CAR".to_string()),
        seal_type: None,
    }];
}

pub fn sample_transport_call() -> TransportCall {
    TransportCall {
        transport_call_id: "TC-1".to_string(),
        transport_call_reference: Some("TCREF-1".to_string()),
        un_location_code: Some("NLRTM".to_string()),
        facility_code: None,
        mode_of_transport: ModeOfTransport::VESSEL,
        vessel: None,
    }
}

pub fn shipment_event() -> Event {
    Event::new(EventPayload::Shipment(ShipmentEvent {
        shipment_event_type_code: ShipmentEventTypeCode::APPR,
        document_type_code: DocumentTypeCode::BKG,
        document_id: "BKG-1".to_string(),
        reason: None,
        references: Vec::new(),
    }))
}

pub fn transport_event() -> Event {
    Event::new(EventPayload::Transport(TransportEvent {
        transport_event_type_code: TransportEventTypeCode::ARRI,
        delay_reason_code: None,
        change_remark: None,
        transport_call_id: Some("TC-1".to_string()),
        transport_call: None,
    }))
}

pub fn equipment_event() -> Event {
    Event::new(EventPayload::Equipment(EquipmentEvent {
        equipment_event_type_code: EquipmentEventTypeCode::LOAD,
        equipment_reference: Some("APZU4812090".to_string()),
        empty_indicator_code: EmptyIndicatorCode::LADEN,
        transport_call_id: Some("TC-1".to_string()),
        transport_call: None,
        seals: Vec::new(),
    }))
}

pub fn operations_event() -> Event {
    Event::new(EventPayload::Operations(OperationsEvent {
        operations_event_type_code: OperationsEventTypeCode::STRT,
        publisher: "terminal-1".to_string(),
        port_call_service_type_code: None,
        facility_type_code: None,
        transport_call_id: Some("TC-1".to_string()),
    }))
}

pub fn with_id(mut event: Event, event_id: Uuid) -> Event {
    event.event_id = event_id;
    event
}
