use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::injector::{FaultInjector, InjectError, OperationDelays};
use crate::operation::{Operation, Reply, Status};
use crate::payment::PaymentRecorder;
use crate::synth;
use crate::validation::{
    self, CredentialsForm, SearchTrainsQuery, TrainSeatsQuery, ValidationError,
};
use crate::{MockError, MockResult};

/// Stand-in for the isutrain reservation backend.
///
/// Every operation runs the same pipeline: the fault injector gate (delay,
/// then hook), then validation, then a canned response. Inputs the transport
/// layer failed to extract arrive as `Err` and are reported only after the
/// gate has passed.
///
/// The instance is shared across concurrent calls (`Arc<IsutrainMock>`). Its
/// only mutable state is the hook inside the injector; the payment log belongs
/// to the collaborator.
pub struct IsutrainMock {
    injector: FaultInjector,
    payment: Arc<dyn PaymentRecorder>,
}

impl IsutrainMock {
    pub fn new(payment: Arc<dyn PaymentRecorder>) -> Self {
        Self::with_delays(payment, OperationDelays::default())
    }

    pub fn with_delays(payment: Arc<dyn PaymentRecorder>, delays: OperationDelays) -> Self {
        Self {
            injector: FaultInjector::new(delays),
            payment,
        }
    }

    /// Replace the fault hook. Takes effect for calls that reach the gate afterwards.
    pub fn inject<F>(&self, hook: F)
    where
        F: Fn(&str) -> Result<(), InjectError> + Send + Sync + 'static,
    {
        self.injector.set_hook(hook);
    }

    pub fn delays(&self) -> &OperationDelays {
        self.injector.delays()
    }

    pub async fn initialize(&self, path: &str) -> MockResult<Reply> {
        self.injector.gate(Operation::Initialize, path).await?;
        Ok(Reply::accepted())
    }

    pub async fn register(
        &self,
        path: &str,
        form: Result<CredentialsForm, ValidationError>,
    ) -> MockResult<Reply> {
        self.injector.gate(Operation::Register, path).await?;
        let form = form.map_err(rejected(Operation::Register))?;
        validation::credentials(&form).map_err(rejected(Operation::Register))?;
        Ok(Reply::accepted())
    }

    pub async fn login(
        &self,
        path: &str,
        form: Result<CredentialsForm, ValidationError>,
    ) -> MockResult<Reply> {
        self.injector.gate(Operation::Login, path).await?;
        let form = form.map_err(rejected(Operation::Login))?;
        validation::credentials(&form).map_err(rejected(Operation::Login))?;
        Ok(Reply::accepted())
    }

    pub async fn list_stations(&self, path: &str) -> MockResult<Reply> {
        self.injector.gate(Operation::ListStations, path).await?;
        let body = synth::encode(&synth::stations())?;
        Ok(Reply::json(Status::Ok, body))
    }

    pub async fn search_trains(
        &self,
        path: &str,
        query: Result<SearchTrainsQuery, ValidationError>,
    ) -> MockResult<Reply> {
        self.injector.gate(Operation::SearchTrains, path).await?;
        let query = query.map_err(rejected(Operation::SearchTrains))?;
        let criteria =
            validation::search_trains(&query).map_err(rejected(Operation::SearchTrains))?;
        debug!(
            from = %criteria.from,
            to = %criteria.to,
            use_at = %criteria.use_at,
            "Searching trains"
        );

        let body = synth::encode(&synth::trains())?;
        Ok(Reply::json(Status::Ok, body))
    }

    pub async fn list_train_seats(
        &self,
        path: &str,
        query: Result<TrainSeatsQuery, ValidationError>,
    ) -> MockResult<Reply> {
        self.injector.gate(Operation::ListTrainSeats, path).await?;
        let query = query.map_err(rejected(Operation::ListTrainSeats))?;
        validation::train_seats(&query).map_err(rejected(Operation::ListTrainSeats))?;

        let body = synth::encode(&synth::train_seats())?;
        Ok(Reply::json(Status::Ok, body))
    }

    /// Accepts any payload and answers 202: confirmation is asynchronous on the real backend.
    pub async fn reserve(&self, path: &str) -> MockResult<Reply> {
        self.injector.gate(Operation::Reserve, path).await?;
        let body = synth::encode(&synth::reservation())?;
        Ok(Reply::json(Status::Accepted, body))
    }

    pub async fn commit_reservation(
        &self,
        path: &str,
        raw_id: Result<String, ValidationError>,
    ) -> MockResult<Reply> {
        self.injector.gate(Operation::CommitReservation, path).await?;
        let reservation_id = raw_id
            .and_then(|raw| validation::reservation_id(&raw))
            .map_err(rejected(Operation::CommitReservation))?;

        // No ledger: committing twice or after a cancel is accepted.
        self.payment.add_payment_information();
        info!(reservation_id, "Reservation committed");

        Ok(Reply::accepted())
    }

    pub async fn cancel_reservation(
        &self,
        path: &str,
        raw_id: Result<String, ValidationError>,
    ) -> MockResult<Reply> {
        self.injector.gate(Operation::CancelReservation, path).await?;
        let reservation_id = raw_id
            .and_then(|raw| validation::reservation_id(&raw))
            .map_err(rejected(Operation::CancelReservation))?;
        info!(reservation_id, "Reservation cancelled");

        Ok(Reply::no_content())
    }

    pub async fn list_reservations(&self, path: &str) -> MockResult<Reply> {
        self.injector.gate(Operation::ListReservations, path).await?;
        let body = synth::encode(&synth::reservations(Utc::now()))?;
        Ok(Reply::json(Status::Ok, body))
    }
}

fn rejected(op: Operation) -> impl Fn(ValidationError) -> MockError {
    move |e| {
        debug!(operation = %op, "Rejected request: {}", e);
        MockError::MalformedInput(e)
    }
}
