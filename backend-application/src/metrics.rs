use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    events_created: AtomicU64,
    events_updated: AtomicU64,
    unmapped_enqueued: AtomicU64,
    rejected_requests: AtomicU64,
}

impl Metrics {
    pub fn record_created(&self) {
        self.events_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_updated(&self) {
        self.events_updated.fetch_add(1, Ordering::Relaxed);
    }

    /// Called after the reconciliation queue accepts an entry.
    pub fn record_enqueued(&self) {
        self.unmapped_enqueued.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.rejected_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let created = self.events_created.load(Ordering::Relaxed);
        let updated = self.events_updated.load(Ordering::Relaxed);
        let enqueued = self.unmapped_enqueued.load(Ordering::Relaxed);
        let rejected = self.rejected_requests.load(Ordering::Relaxed);

        format!(
            "# TYPE tnt_events_created_total counter\n\
tnt_events_created_total {}\n\
# TYPE tnt_events_updated_total counter\n\
tnt_events_updated_total {}\n\
# TYPE tnt_unmapped_events_enqueued_total counter\n\
tnt_unmapped_events_enqueued_total {}\n\
# TYPE tnt_rejected_requests_total counter\n\
tnt_rejected_requests_total {}\n",
            created, updated, enqueued, rejected
        )
    }
}
