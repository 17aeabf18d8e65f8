//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router is
//! involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use folio_api::error::AppError;
use folio_db::StoreError;
use folio_notify::NotificationError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn store_error_returns_500_with_detail() {
    let err = AppError::Store(StoreError::Database(sqlx::Error::PoolTimedOut));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = json["error"].as_str().unwrap();
    assert!(message.starts_with("Database error:"), "got: {message}");
}

#[tokio::test]
async fn notification_error_returns_500_with_fixed_message() {
    let err = AppError::Notification(NotificationError::NotConfigured);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({"error": "Failed to send email"}));
}

#[tokio::test]
async fn error_body_has_no_code_field() {
    let err = AppError::Store(StoreError::Database(sqlx::Error::RowNotFound));

    let (_, json) = error_to_response(err).await;

    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(object.contains_key("error"));
}

#[tokio::test]
async fn malformed_body_returns_400() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

    let (status, json) = error_to_response(AppError::from(parse_err)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().starts_with("Invalid JSON body:"));
}
