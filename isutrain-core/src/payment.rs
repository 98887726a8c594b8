/// The one capability the reservation double needs from the payment side:
/// record that a payment was associated with a commit.
///
/// Called synchronously from inside the commit call, once per successful
/// commit and never on a rejected one. Implementations own their own
/// thread-safety.
pub trait PaymentRecorder: Send + Sync {
    fn add_payment_information(&self);
}

/// Drops every notification. For exercising the reservation double alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPaymentRecorder;

impl PaymentRecorder for NoopPaymentRecorder {
    fn add_payment_information(&self) {}
}
