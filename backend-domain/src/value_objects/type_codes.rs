// Variant-specific code lists

code_enum! {
    ShipmentEventTypeCode ("shipment event type code") {
        RECE, DRFT, PENA, PENU, REJE, APPR, ISSU, SURR, SUBM, VOID, CONF, REQS, CMPL, HOLD, RELS,
    }
}

code_enum! {
    DocumentTypeCode ("document type code") {
        CBR, BKG, SHI, SRM, TRD, ARN, VGM, CAS, CUS, DGD, OOG,
    }
}

code_enum! {
    TransportEventTypeCode ("transport event type code") {
        ARRI, DEPA,
    }
}

code_enum! {
    EquipmentEventTypeCode ("equipment event type code") {
        LOAD, DISC, GTIN, GTOT, STUF, STRP, PICK, DROP, INSP, RSEA, RMVD,
    }
}

code_enum! {
    EmptyIndicatorCode ("empty indicator code") {
        EMPTY, LADEN,
    }
}

code_enum! {
    OperationsEventTypeCode ("operations event type code") {
        STRT, CMPL, ARRI, DEPA, CANC, OMIT,
    }
}

code_enum! {
    ModeOfTransport ("mode of transport") {
        VESSEL, RAIL, TRUCK, BARGE,
    }
}
