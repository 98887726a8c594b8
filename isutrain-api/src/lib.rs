use std::borrow::Cow;

use axum::{http::Uri, Router};
use percent_encoding::percent_decode_str;
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod error;
pub mod reservations;
pub mod response;
pub mod state;
pub mod trains;

pub use state::AppState;

/// Route templates of the reservation backend.
pub mod paths {
    pub const INITIALIZE: &str = "/initialize";
    pub const REGISTER: &str = "/register";
    pub const LOGIN: &str = "/login";
    pub const STATIONS: &str = "/stations";
    pub const SEARCH_TRAINS: &str = "/train/search";
    pub const TRAIN_SEATS: &str = "/train/seats";
    pub const RESERVE: &str = "/reserve";
    pub const COMMIT_RESERVATION: &str = "/reservation/{id}/commit";
    pub const CANCEL_RESERVATION: &str = "/reservation/{id}/cancel";
    pub const RESERVATIONS: &str = "/reservation";
}

/// The key handed to the fault hook: the request path, percent-decoded.
///
/// Bytes that do not decode to UTF-8 become U+FFFD so the hook still runs.
pub fn logical_path(uri: &Uri) -> Cow<'_, str> {
    percent_decode_str(uri.path()).decode_utf8_lossy()
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(auth::routes())
        .merge(trains::routes())
        .merge(reservations::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
