use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use spazalink_core::storage::{repository_error_to_status_code, RepositoryError};

/// Application error wrapper for handlers.
///
/// Converts repository errors into HTTP responses using the status mapping
/// from the core crate, so `?` works in handlers returning
/// `Result<_, AppError>`.
pub struct AppError(RepositoryError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(repository_error_to_status_code(&self.0))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Repository error");
        } else {
            tracing::warn!(error = %self.0, "Request rejected");
        }

        (status, self.0.to_string()).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        Self(err)
    }
}
