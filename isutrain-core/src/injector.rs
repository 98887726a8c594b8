use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use crate::operation::Operation;
use crate::{MockError, MockResult};

pub type InjectError = Box<dyn std::error::Error + Send + Sync>;

/// Hook consulted with the logical path of every request.
pub type InjectFn = Arc<dyn Fn(&str) -> Result<(), InjectError> + Send + Sync>;

// ============================================================================
// Delays
// ============================================================================

/// Artificial latency per operation. Zero means no delay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationDelays {
    pub initialize: Duration,
    pub register: Duration,
    pub login: Duration,
    pub list_stations: Duration,
    pub search_trains: Duration,
    pub list_train_seats: Duration,
    pub reserve: Duration,
    pub commit_reservation: Duration,
    pub cancel_reservation: Duration,
    pub list_reservations: Duration,
}

impl OperationDelays {
    pub fn get(&self, op: Operation) -> Duration {
        match op {
            Operation::Initialize => self.initialize,
            Operation::Register => self.register,
            Operation::Login => self.login,
            Operation::ListStations => self.list_stations,
            Operation::SearchTrains => self.search_trains,
            Operation::ListTrainSeats => self.list_train_seats,
            Operation::Reserve => self.reserve,
            Operation::CommitReservation => self.commit_reservation,
            Operation::CancelReservation => self.cancel_reservation,
            Operation::ListReservations => self.list_reservations,
        }
    }

    pub fn set(&mut self, op: Operation, delay: Duration) {
        let slot = match op {
            Operation::Initialize => &mut self.initialize,
            Operation::Register => &mut self.register,
            Operation::Login => &mut self.login,
            Operation::ListStations => &mut self.list_stations,
            Operation::SearchTrains => &mut self.search_trains,
            Operation::ListTrainSeats => &mut self.list_train_seats,
            Operation::Reserve => &mut self.reserve,
            Operation::CommitReservation => &mut self.commit_reservation,
            Operation::CancelReservation => &mut self.cancel_reservation,
            Operation::ListReservations => &mut self.list_reservations,
        };
        *slot = delay;
    }
}

// ============================================================================
// Injector
// ============================================================================

/// Per-call gate run before any validation or synthesis.
///
/// The hook lives behind a read-mostly lock owned by this instance. Callers
/// clone the `Arc` out and release the lock before invoking it, so a
/// replacement made with [`FaultInjector::set_hook`] is seen by later calls
/// while calls already past the gate keep the hook they started with.
pub struct FaultInjector {
    delays: OperationDelays,
    hook: RwLock<InjectFn>,
}

impl FaultInjector {
    pub fn new(delays: OperationDelays) -> Self {
        let hook: InjectFn = Arc::new(pass);
        Self {
            delays,
            hook: RwLock::new(hook),
        }
    }

    pub fn delays(&self) -> &OperationDelays {
        &self.delays
    }

    pub fn set_hook<F>(&self, hook: F)
    where
        F: Fn(&str) -> Result<(), InjectError> + Send + Sync + 'static,
    {
        *self.hook.write() = Arc::new(hook);
    }

    /// Sleep for the operation's delay, then ask the hook whether `path` may proceed.
    pub async fn gate(&self, op: Operation, path: &str) -> MockResult<()> {
        let delay = self.delays.get(op);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let hook = self.hook.read().clone();
        hook(path).map_err(|e| {
            tracing::warn!(operation = %op, path, "Injected failure: {}", e);
            MockError::InjectedFailure(e.to_string())
        })
    }
}

fn pass(_path: &str) -> Result<(), InjectError> {
    Ok(())
}

impl Default for FaultInjector {
    fn default() -> Self {
        Self::new(OperationDelays::default())
    }
}

/// A hook that rejects exactly the given logical paths.
pub fn fail_paths<I, S>(
    paths: I,
) -> impl Fn(&str) -> Result<(), InjectError> + Send + Sync + 'static
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let paths: HashSet<String> = paths.into_iter().map(Into::into).collect();
    move |path: &str| -> Result<(), InjectError> {
        if paths.contains(path) {
            Err(format!("path {} is configured to fail", path).into())
        } else {
            Ok(())
        }
    }
}
