use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::error::{malformed, AppError};
use crate::response::ApiReply;
use crate::state::AppState;
use crate::{logical_path, paths};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(paths::RESERVE, post(reserve))
        .route(paths::COMMIT_RESERVATION, post(commit_reservation))
        .route(
            paths::CANCEL_RESERVATION,
            post(cancel_reservation).delete(cancel_reservation),
        )
        .route(paths::RESERVATIONS, get(list_reservations))
}

/// POST /reserve
///
/// The payload is not read.
async fn reserve(State(state): State<AppState>, uri: Uri) -> Result<ApiReply, AppError> {
    Ok(state.mock.reserve(&logical_path(&uri)).await?.into())
}

/// POST /reservation/{id}/commit
async fn commit_reservation(
    State(state): State<AppState>,
    uri: Uri,
    id: Result<Path<String>, PathRejection>,
) -> Result<ApiReply, AppError> {
    let id = id.map(|Path(id)| id).map_err(malformed);
    Ok(state.mock.commit_reservation(&logical_path(&uri), id).await?.into())
}

/// DELETE /reservation/{id}/cancel
async fn cancel_reservation(
    State(state): State<AppState>,
    uri: Uri,
    id: Result<Path<String>, PathRejection>,
) -> Result<ApiReply, AppError> {
    let id = id.map(|Path(id)| id).map_err(malformed);
    Ok(state.mock.cancel_reservation(&logical_path(&uri), id).await?.into())
}

/// GET /reservation
async fn list_reservations(State(state): State<AppState>, uri: Uri) -> Result<ApiReply, AppError> {
    Ok(state.mock.list_reservations(&logical_path(&uri)).await?.into())
}
