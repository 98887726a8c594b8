//! Canned payloads. Nothing here looks at request content.

use chrono::{DateTime, Utc};
use isutrain_shared::{
    PaymentMethod, ReservationResponse, ReservationStatus, SeatReservation, Station, Train,
    TrainSeat,
};
use serde::Serialize;

use crate::MockResult;

pub const RESERVATION_ID: &str = "1111111111";
pub const HISTORY_RESERVATION_ID: u64 = 1111;

pub fn stations() -> Vec<Station> {
    vec![Station {
        id: 1,
        name: "isutrain1".to_string(),
        is_stop_express: false,
        is_stop_semi_express: false,
        is_stop_local: false,
    }]
}

pub fn trains() -> Vec<Train> {
    vec![
        Train { class: "のぞみ".to_string(), name: "96号".to_string(), start: 1, last: 2 },
        Train { class: "こだま".to_string(), name: "96号".to_string(), start: 3, last: 4 },
    ]
}

pub fn train_seats() -> Vec<TrainSeat> {
    vec![TrainSeat::default()]
}

pub fn reservation() -> ReservationResponse {
    ReservationResponse {
        reservation_id: RESERVATION_ID.to_string(),
        is_ok: true,
    }
}

pub fn reservations(now: DateTime<Utc>) -> Vec<SeatReservation> {
    vec![SeatReservation {
        id: HISTORY_RESERVATION_ID,
        payment_method: PaymentMethod::CreditCard,
        status: ReservationStatus::Pending,
        reserve_at: now,
    }]
}

pub fn encode<T: Serialize>(value: &T) -> MockResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| {
        tracing::error!("Failed to encode response: {}", e);
        e.into()
    })
}
