use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::Uri,
    routing::get,
    Router,
};
use axum_extra::extract::{Query as MultiQuery, QueryRejection as MultiQueryRejection};
use isutrain_core::validation::{SearchTrainsQuery, TrainSeatsQuery};

use crate::error::{malformed, AppError};
use crate::response::ApiReply;
use crate::state::AppState;
use crate::{logical_path, paths};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(paths::STATIONS, get(list_stations))
        .route(paths::SEARCH_TRAINS, get(search_trains))
        .route(paths::TRAIN_SEATS, get(list_train_seats))
}

/// GET /stations
async fn list_stations(State(state): State<AppState>, uri: Uri) -> Result<ApiReply, AppError> {
    Ok(state.mock.list_stations(&logical_path(&uri)).await?.into())
}

/// GET /train/search?use_at=..&from=..&to=..
async fn search_trains(
    State(state): State<AppState>,
    uri: Uri,
    query: Result<Query<SearchTrainsQuery>, QueryRejection>,
) -> Result<ApiReply, AppError> {
    let query = query.map(|Query(q)| q).map_err(malformed);
    Ok(state.mock.search_trains(&logical_path(&uri), query).await?.into())
}

/// GET /train/seats?train_class=..&train_name=..
///
/// Both keys may repeat, hence the sequence-aware extractor.
async fn list_train_seats(
    State(state): State<AppState>,
    uri: Uri,
    query: Result<MultiQuery<TrainSeatsQuery>, MultiQueryRejection>,
) -> Result<ApiReply, AppError> {
    let query = query.map(|MultiQuery(q)| q).map_err(malformed);
    Ok(state.mock.list_train_seats(&logical_path(&uri), query).await?.into())
}
