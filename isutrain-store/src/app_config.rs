use isutrain_core::{Operation, OperationDelays};
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub delays: DelayConfig,
    #[serde(default)]
    pub fault: FaultConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: default_port() }
    }
}

fn default_port() -> u16 { 8080 }

/// Artificial latency per operation, in milliseconds.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DelayConfig {
    pub initialize_ms: u64,
    pub register_ms: u64,
    pub login_ms: u64,
    pub list_stations_ms: u64,
    pub search_trains_ms: u64,
    pub list_train_seats_ms: u64,
    pub reserve_ms: u64,
    pub commit_reservation_ms: u64,
    pub cancel_reservation_ms: u64,
    pub list_reservations_ms: u64,
}

impl DelayConfig {
    fn millis(&self, op: Operation) -> u64 {
        match op {
            Operation::Initialize => self.initialize_ms,
            Operation::Register => self.register_ms,
            Operation::Login => self.login_ms,
            Operation::ListStations => self.list_stations_ms,
            Operation::SearchTrains => self.search_trains_ms,
            Operation::ListTrainSeats => self.list_train_seats_ms,
            Operation::Reserve => self.reserve_ms,
            Operation::CommitReservation => self.commit_reservation_ms,
            Operation::CancelReservation => self.cancel_reservation_ms,
            Operation::ListReservations => self.list_reservations_ms,
        }
    }

    pub fn to_delays(&self) -> OperationDelays {
        let mut delays = OperationDelays::default();
        for op in Operation::ALL {
            delays.set(op, Duration::from_millis(self.millis(op)));
        }
        delays
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FaultConfig {
    /// Logical paths that always answer with an injected failure
    #[serde(default)]
    pub fail_paths: Vec<String>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `ISUTRAIN_DELAYS__LOGIN_MS=200`, `ISUTRAIN_FAULT__FAIL_PATHS=/login,/reserve`
            .add_source(
                config::Environment::with_prefix("ISUTRAIN")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("fault.fail_paths")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }
}
