pub mod app_config;
pub mod payment_repo;

pub use app_config::Config;
pub use payment_repo::{PaymentMock, PaymentRecord};
