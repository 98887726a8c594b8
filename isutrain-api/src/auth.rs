use axum::{
    extract::{rejection::FormRejection, State},
    http::Uri,
    routing::post,
    Form, Router,
};
use isutrain_core::validation::CredentialsForm;

use crate::error::{malformed, AppError};
use crate::response::ApiReply;
use crate::state::AppState;
use crate::{logical_path, paths};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(paths::INITIALIZE, post(initialize))
        .route(paths::REGISTER, post(register))
        .route(paths::LOGIN, post(login))
}

/// POST /initialize
async fn initialize(State(state): State<AppState>, uri: Uri) -> Result<ApiReply, AppError> {
    Ok(state.mock.initialize(&logical_path(&uri)).await?.into())
}

/// POST /register
async fn register(
    State(state): State<AppState>,
    uri: Uri,
    form: Result<Form<CredentialsForm>, FormRejection>,
) -> Result<ApiReply, AppError> {
    let form = form.map(|Form(f)| f).map_err(malformed);
    Ok(state.mock.register(&logical_path(&uri), form).await?.into())
}

/// POST /login
async fn login(
    State(state): State<AppState>,
    uri: Uri,
    form: Result<Form<CredentialsForm>, FormRejection>,
) -> Result<ApiReply, AppError> {
    let form = form.map(|Form(f)| f).map_err(malformed);
    Ok(state.mock.login(&logical_path(&uri), form).await?.into())
}
