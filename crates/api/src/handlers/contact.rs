//! Handler for contact-form submissions.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::Json;
use folio_core::contact::ContactMessage;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

pub const CONTACT_SUCCESS_MESSAGE: &str = "Message sent successfully!";

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub message: &'static str,
}

/// POST /contact
///
/// Stores the submission, then emails the operator. The notification is
/// only attempted after the insert has succeeded; if it fails the stored
/// row is kept and the caller gets a 500.
///
/// A body that is not declared as JSON is treated as an empty submission
/// and still stored.
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<ContactResponse>> {
    let input = if is_json_content(&headers) {
        ContactMessage::from_json_body(&body)?
    } else {
        ContactMessage::default()
    };

    let contact_id = state.store.insert_contact(&input).await?;
    tracing::info!(contact_id, "Contact submission stored");

    state.notifier.notify(&input).await?;

    Ok(Json(ContactResponse {
        message: CONTACT_SUCCESS_MESSAGE,
    }))
}

/// `application/json` or any `+json` media type, parameters ignored.
fn is_json_content(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
