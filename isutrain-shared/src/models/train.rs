use serde::{Deserialize, Serialize};

/// A station on the line, with the service tiers that stop there.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Station {
    pub id: u64,
    pub name: String,
    pub is_stop_express: bool,
    pub is_stop_semi_express: bool,
    pub is_stop_local: bool,
}

/// A scheduled train between two stations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Train {
    /// Service tier label, e.g. "のぞみ" or "こだま"
    pub class: String,
    pub name: String,
    pub start: u64,
    pub last: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainSeat {
    pub row: u32,
    pub column: String,
    pub class: String,
    pub is_smoking_seat: bool,
    pub is_occupied: bool,
}
