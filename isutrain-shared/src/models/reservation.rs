use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    CreditCard,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationStatus::Pending => write!(f, "pending"),
            ReservationStatus::Confirmed => write!(f, "confirmed"),
            ReservationStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Outcome of a reserve call. The backend confirms asynchronously, so this
/// only says the request was taken.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReservationResponse {
    pub reservation_id: String,
    pub is_ok: bool,
}

/// One entry of an account's reservation history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeatReservation {
    pub id: u64,
    pub payment_method: PaymentMethod,
    pub status: ReservationStatus,
    pub reserve_at: DateTime<Utc>,
}
