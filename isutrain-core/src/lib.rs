pub mod injector;
pub mod mock;
pub mod operation;
pub mod payment;
pub mod synth;
pub mod validation;

pub use injector::{FaultInjector, InjectError, OperationDelays};
pub use mock::IsutrainMock;
pub use operation::{Body, Operation, Reply, Status};
pub use payment::{NoopPaymentRecorder, PaymentRecorder};
pub use validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum MockError {
    #[error("Injected failure: {0}")]
    InjectedFailure(String),
    #[error("Malformed input: {0}")]
    MalformedInput(#[from] ValidationError),
    #[error("Response encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

pub type MockResult<T> = Result<T, MockError>;
