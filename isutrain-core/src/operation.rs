use std::fmt;

/// The logical operations the reservation backend exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Initialize,
    Register,
    Login,
    ListStations,
    SearchTrains,
    ListTrainSeats,
    Reserve,
    CommitReservation,
    CancelReservation,
    ListReservations,
}

impl Operation {
    pub const ALL: [Operation; 10] = [
        Operation::Initialize,
        Operation::Register,
        Operation::Login,
        Operation::ListStations,
        Operation::SearchTrains,
        Operation::ListTrainSeats,
        Operation::Reserve,
        Operation::CommitReservation,
        Operation::CancelReservation,
        Operation::ListReservations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Initialize => "initialize",
            Operation::Register => "register",
            Operation::Login => "login",
            Operation::ListStations => "list_stations",
            Operation::SearchTrains => "search_trains",
            Operation::ListTrainSeats => "list_train_seats",
            Operation::Reserve => "reserve",
            Operation::CommitReservation => "commit_reservation",
            Operation::CancelReservation => "cancel_reservation",
            Operation::ListReservations => "list_reservations",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Success statuses the double can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Accepted,
    NoContent,
}

impl Status {
    pub fn code(&self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::Accepted => 202,
            Status::NoContent => 204,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Accepted => "Accepted",
            Status::NoContent => "No Content",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Plain-text acknowledgment carrying the status reason phrase
    Ack,
    Json(Vec<u8>),
    Empty,
}

/// A transport-agnostic response: status plus encoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: Status,
    pub body: Body,
}

impl Reply {
    pub fn accepted() -> Self {
        Self { status: Status::Accepted, body: Body::Ack }
    }

    pub fn no_content() -> Self {
        Self { status: Status::NoContent, body: Body::Empty }
    }

    pub fn json(status: Status, body: Vec<u8>) -> Self {
        Self { status, body: Body::Json(body) }
    }
}
