use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use backend_application::{AppError, EventDispatcher, EventPorts};
use backend_domain::{
    EmptyIndicatorCode, EquipmentEvent, EquipmentEventTypeCode, Event, EventPayload, EventQuery,
    EventStore, EventType, ModeOfTransport, Seal, TransportCall, TransportEvent,
    TransportEventTypeCode, TypedEvent, TypedEventService, UnmappedEvent,
    UnmappedEventRepository,
};
use backend_infrastructure::{
    EventTable, InMemoryEquipmentEventService, InMemoryEventStore,
    InMemoryOperationsEventService, InMemoryShipmentEventService, InMemoryTransportEventService,
    InMemoryUnmappedEventRepository, RelatedEntityTable, SeedFileRepository,
};

struct Stores {
    table: Arc<EventTable>,
    related: Arc<RelatedEntityTable>,
    event_store: Arc<InMemoryEventStore>,
    transport: Arc<InMemoryTransportEventService>,
    equipment: Arc<InMemoryEquipmentEventService>,
    unmapped: Arc<InMemoryUnmappedEventRepository>,
    dispatcher: EventDispatcher,
}

fn stores() -> Stores {
    let table = Arc::new(EventTable::new());
    let related = Arc::new(RelatedEntityTable::new());
    let event_store = Arc::new(InMemoryEventStore::new(table.clone()));
    let transport = Arc::new(InMemoryTransportEventService::new(
        table.clone(),
        related.clone(),
    ));
    let equipment = Arc::new(InMemoryEquipmentEventService::new(
        table.clone(),
        related.clone(),
    ));
    let unmapped = Arc::new(InMemoryUnmappedEventRepository::new());
    let dispatcher = EventDispatcher::new(
        EventPorts {
            event_store: event_store.clone(),
            shipment: Arc::new(InMemoryShipmentEventService::new(
                table.clone(),
                related.clone(),
            )),
            transport: transport.clone(),
            equipment: equipment.clone(),
            operations: Arc::new(InMemoryOperationsEventService::new(
                table.clone(),
                related.clone(),
            )),
            unmapped_events: unmapped.clone(),
        },
        EventType::ALL.to_vec(),
    );
    Stores {
        table,
        related,
        event_store,
        transport,
        equipment,
        unmapped,
        dispatcher,
    }
}

fn transport_event(transport_call_id: &str) -> Event {
    Event::new(EventPayload::Transport(TransportEvent {
        transport_event_type_code: TransportEventTypeCode::DEPA,
        delay_reason_code: None,
        change_remark: None,
        transport_call_id: Some(transport_call_id.to_string()),
        transport_call: None,
    }))
}

fn equipment_event(equipment_reference: &str) -> Event {
    Event::new(EventPayload::Equipment(EquipmentEvent {
        equipment_event_type_code: EquipmentEventTypeCode::GTIN,
        equipment_reference: Some(equipment_reference.to_string()),
        empty_indicator_code: EmptyIndicatorCode::EMPTY,
        transport_call_id: Some("TC-9".to_string()),
        transport_call: None,
        seals: Vec::new(),
    }))
}

fn transport_call(id: &str) -> TransportCall {
    TransportCall {
        transport_call_id: id.to_string(),
        transport_call_reference: None,
        un_location_code: Some("USNYC".to_string()),
        facility_code: None,
        mode_of_transport: ModeOfTransport::VESSEL,
        vessel: None,
    }
}

#[tokio::test]
async fn typed_update_keeps_stored_router_fields() {
    let stores = stores();
    let mut event = transport_event("TC-1");
    event.carrier_booking_reference = Some("BR-1".to_string());
    event.created_or_now();
    stores.event_store.create(event.clone()).await.expect("create");

    let mut typed = TypedEvent::<TransportEvent>::try_from_event(event.clone()).expect("typed");
    typed.record.payload.change_remark = Some("berth moved".to_string());
    typed.record.payload.transport_call = Some(transport_call("TC-1"));
    let updated = stores
        .transport
        .update(typed.record)
        .await
        .expect("update")
        .expect("row exists");
    assert!(updated.payload.transport_call.is_none());

    let row = stores.table.get(event.event_id).await.expect("row");
    assert_eq!(row.event_type, Some(EventType::TRANSPORT));
    assert_eq!(row.carrier_booking_reference.as_deref(), Some("BR-1"));
    match row.payload {
        EventPayload::Transport(p) => {
            assert_eq!(p.change_remark.as_deref(), Some("berth moved"));
            assert!(p.transport_call.is_none());
        }
        other => panic!("unexpected payload {other:?}"),
    }
}

#[tokio::test]
async fn typed_services_only_see_their_variant() {
    let stores = stores();
    let mut event = equipment_event("APZU4812090");
    event.created_or_now();
    stores.event_store.create(event.clone()).await.expect("create");

    assert!(stores
        .transport
        .find_by_id(event.event_id)
        .await
        .expect("lookup")
        .is_none());
    assert!(stores
        .equipment
        .find_by_id(event.event_id)
        .await
        .expect("lookup")
        .is_some());
}

#[tokio::test]
async fn typed_create_rejects_duplicate_ids() {
    let stores = stores();
    let typed = TypedEvent::<TransportEvent>::try_from_event(transport_event("TC-1")).expect("typed");

    stores.transport.create(typed.clone()).await.expect("first create");
    assert!(stores.transport.create(typed).await.is_err());
    assert_eq!(stores.table.len().await, 1);
}

#[tokio::test]
async fn equipment_relations_include_transport_call_and_seals() {
    let stores = stores();
    stores.related.put_transport_call(transport_call("TC-9")).await;
    stores
        .related
        .add_seal(
            "APZU4812090",
            Seal {
                seal_number: "SN-77".to_string(),
                seal_source: None,
                seal_type: Some("BLT".to_string()),
            },
        )
        .await;

    let typed = TypedEvent::<EquipmentEvent>::try_from_event(equipment_event("APZU4812090"))
        .expect("typed");
    let record = stores
        .equipment
        .load_related_entities(typed.record)
        .await
        .expect("load");
    assert_eq!(record.payload.transport_call, Some(transport_call("TC-9")));
    assert_eq!(record.payload.seals.len(), 1);
}

#[tokio::test]
async fn unmapped_save_replaces_and_requeues() {
    let repo = InMemoryUnmappedEventRepository::new();
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    let now = chrono::Utc::now();

    repo.save(UnmappedEvent::updated(first, now)).await.expect("save");
    repo.save(UnmappedEvent::updated(second, now)).await.expect("save");
    repo.save(UnmappedEvent::updated(first, now)).await.expect("save again");

    let listed = repo.list(10).await.expect("list");
    let ids: Vec<Uuid> = listed.iter().map(|entry| entry.event_id).collect();
    assert_eq!(ids, vec![second, first]);
    assert_eq!(repo.list(1).await.expect("list").len(), 1);
}

#[tokio::test]
async fn dispatcher_round_trip_over_in_memory_stores() {
    let stores = stores();
    stores.related.put_transport_call(transport_call("TC-1")).await;

    let created = stores
        .dispatcher
        .create(transport_event("TC-1"))
        .await
        .expect("create");
    assert!(stores
        .unmapped
        .find_by_event_id(created.event_id)
        .await
        .expect("lookup")
        .is_none());

    let mut changed = created.clone();
    if let EventPayload::Transport(p) = &mut changed.payload {
        p.delay_reason_code = Some("WEA".to_string());
    }
    stores.dispatcher.update(changed).await.expect("update");

    let entry = stores
        .unmapped
        .find_by_event_id(created.event_id)
        .await
        .expect("lookup")
        .expect("queued");
    assert!(!entry.is_new_record);
    assert_eq!(Some(entry.enqueued_at_date_time), created.event_created_date_time);

    let found = stores
        .dispatcher
        .find_by_id(created.event_id)
        .await
        .expect("find");
    match found.payload {
        EventPayload::Transport(p) => {
            assert_eq!(p.delay_reason_code.as_deref(), Some("WEA"));
            assert_eq!(p.transport_call, Some(transport_call("TC-1")));
        }
        other => panic!("unexpected payload {other:?}"),
    }

    let listed = stores
        .dispatcher
        .find_all_extended(&EventQuery {
            event_type: Some(EventType::TRANSPORT),
            limit: Some(10),
            offset: 0,
        })
        .await
        .expect("list");
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn dispatcher_update_of_missing_event_is_not_found() {
    let stores = stores();
    let err = stores
        .dispatcher
        .update(transport_event("TC-1"))
        .await
        .expect_err("missing");
    assert!(matches!(err, AppError::NotFound(_)));
    assert!(stores.unmapped.list(10).await.expect("list").is_empty());
}

#[tokio::test]
async fn seed_file_populates_events_and_relations() {
    let path = std::env::temp_dir().join(format!("tnt-seed-{}.json", Uuid::new_v4()));
    let seed = json!({
        "events": [
            {
                "eventType": "EQUIPMENT",
                "equipmentEventTypeCode": "LOAD",
                "equipmentReference": "APZU4812090",
                "emptyIndicatorCode": "LADEN",
                "transportCallId": "TC-9"
            },
            {
                "eventType": "OPERATIONS",
                "operationsEventTypeCode": "ARRI",
                "publisher": "port-authority"
            }
        ],
        "transportCalls": [
            { "transportCallId": "TC-9", "modeOfTransport": "VESSEL" }
        ],
        "seals": [
            { "equipmentReference": "APZU4812090", "sealNumber": "SN-1" }
        ]
    });
    tokio::fs::write(&path, seed.to_string()).await.expect("write seed");

    let stores = stores();
    let repo = SeedFileRepository::new();
    let data = repo
        .load(path.to_str().expect("utf-8 path"))
        .await
        .expect("load seed");
    let summary = repo
        .apply(data, stores.event_store.as_ref(), &stores.related)
        .await
        .expect("apply seed");
    let _ = tokio::fs::remove_file(&path).await;

    assert_eq!(summary.events, 2);
    assert_eq!(summary.seals, 1);

    let events = stores
        .dispatcher
        .find_all_extended(&EventQuery::default())
        .await
        .expect("list");
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|event| event.event_created_date_time.is_some()));
    match &events[0].payload {
        EventPayload::Equipment(p) => {
            assert_eq!(p.seals.len(), 1);
            assert!(p.transport_call.is_some());
        }
        other => panic!("unexpected payload {other:?}"),
    }
}

#[tokio::test]
async fn missing_seed_file_is_empty() {
    let repo = SeedFileRepository::new();
    let data = repo
        .load("/definitely/not/here/seed.json")
        .await
        .expect("load");
    assert!(data.events.is_empty());
}
