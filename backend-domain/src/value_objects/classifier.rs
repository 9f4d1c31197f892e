// Event classifier value object

code_enum! {
    /// Planned, actual or estimated.
    EventClassifierCode ("event classifier code") {
        PLN,
        ACT,
        EST,
    }
}
