use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use isutrain_core::{MockError, ValidationError};

/// Failure of a double operation, rendered as a status code plus its reason phrase.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct AppError(#[from] pub MockError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            MockError::InjectedFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            MockError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            MockError::Encoding(err) => {
                tracing::error!("Internal Server Error: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Never leak hook or validation details to the client
        let reason = status.canonical_reason().unwrap_or("Error");
        (status, reason).into_response()
    }
}

/// Turn an extractor rejection into a validation failure the core reports after its gate.
pub fn malformed(rejection: impl Display) -> ValidationError {
    ValidationError::Malformed(rejection.to_string())
}
