pub mod reservation;
pub mod train;
