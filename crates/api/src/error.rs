use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_db::StoreError;
use folio_notify::NotificationError;
use serde_json::json;

/// Message returned when a contact submission was stored but the operator
/// email could not be sent.
pub const NOTIFICATION_FAILED_MESSAGE: &str = "Failed to send email";

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`]: store and notification failures become a 500
/// with a JSON `{"error": ...}` body; the message, not the status, tells
/// them apart. An unparseable JSON request body is a 400.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The store call failed (connection, pool or query).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The operator notification could not be delivered.
    #[error(transparent)]
    Notification(#[from] NotificationError),

    /// The request declared a JSON body that does not parse.
    #[error("Invalid JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            AppError::Notification(err) => {
                tracing::error!(error = %err, "Error sending email");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    NOTIFICATION_FAILED_MESSAGE.to_string(),
                )
            }
            AppError::MalformedBody(err) => {
                tracing::debug!(error = %err, "Rejected request body");
                (StatusCode::BAD_REQUEST, self.to_string())
            }
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}
