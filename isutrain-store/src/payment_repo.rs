use chrono::{DateTime, Utc};
use isutrain_core::PaymentRecorder;
use parking_lot::Mutex;
use tracing::info;
use uuid::Uuid;

/// A payment the double was told about. Tests only check that one exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRecord {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
}

/// In-memory payment double. The log lives as long as the process.
#[derive(Debug, Default)]
pub struct PaymentMock {
    records: Mutex<Vec<PaymentRecord>>,
}

impl PaymentMock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payment_count(&self) -> usize {
        self.records.lock().len()
    }

    /// Snapshot of the log, oldest first.
    pub fn records(&self) -> Vec<PaymentRecord> {
        self.records.lock().clone()
    }
}

impl PaymentRecorder for PaymentMock {
    fn add_payment_information(&self) {
        let record = PaymentRecord {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
        };
        info!(payment_id = %record.id, "Payment recorded");
        self.records.lock().push(record);
    }
}
