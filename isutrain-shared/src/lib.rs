pub mod models;

pub use models::reservation::{
    PaymentMethod, ReservationResponse, ReservationStatus, SeatReservation,
};
pub use models::train::{Station, Train, TrainSeat};
