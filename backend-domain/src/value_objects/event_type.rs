// Event discriminant

code_enum! {
    /// Selects the typed service and the payload fields valid for an event.
    EventType ("event type") {
        SHIPMENT,
        TRANSPORT,
        EQUIPMENT,
        OPERATIONS,
    }
}
