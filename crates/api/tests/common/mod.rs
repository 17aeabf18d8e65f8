#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use folio_core::contact::ContactMessage;
use folio_core::portfolio::ProjectImageRow;
use folio_core::types::Record;
use folio_db::{DatabaseConfig, PortfolioStore, StoreError};
use folio_notify::{ContactNotifier, NotificationError};
use http_body_util::BodyExt;
use tower::ServiceExt;

use folio_api::config::{CorsOrigins, LogFormat, ServerConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;

// ---------------------------------------------------------------------------
// Test doubles
// ---------------------------------------------------------------------------

/// In-memory [`PortfolioStore`]. When `fail` is set every call returns a
/// pool timeout, as an exhausted or unreachable pool would.
#[derive(Default)]
pub struct InMemoryStore {
    pub project_rows: Vec<ProjectImageRow>,
    pub skills: Vec<Record>,
    pub education: Vec<Record>,
    pub internships: Vec<Record>,
    pub contacts: Mutex<Vec<ContactMessage>>,
    pub fail: bool,
}

impl InMemoryStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.fail {
            Err(StoreError::Database(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PortfolioStore for InMemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }

    async fn project_rows(&self) -> Result<Vec<ProjectImageRow>, StoreError> {
        self.check()?;
        Ok(self.project_rows.clone())
    }

    async fn skills(&self) -> Result<Vec<Record>, StoreError> {
        self.check()?;
        Ok(self.skills.clone())
    }

    async fn education(&self) -> Result<Vec<Record>, StoreError> {
        self.check()?;
        Ok(self.education.clone())
    }

    async fn internships(&self) -> Result<Vec<Record>, StoreError> {
        self.check()?;
        Ok(self.internships.clone())
    }

    async fn insert_contact(&self, message: &ContactMessage) -> Result<u64, StoreError> {
        self.check()?;
        let mut contacts = self.contacts.lock().unwrap();
        contacts.push(message.clone());
        Ok(contacts.len() as u64)
    }

    async fn close(&self) {}
}

/// [`ContactNotifier`] that records sends and optionally fails them.
#[derive(Default)]
pub struct ScriptedNotifier {
    pub fail: bool,
    pub sent: Mutex<Vec<ContactMessage>>,
}

impl ScriptedNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl ContactNotifier for ScriptedNotifier {
    async fn notify(&self, message: &ContactMessage) -> Result<(), NotificationError> {
        if self.fail {
            return Err(NotificationError::Build("transport rejected".into()));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as the only CORS origin and a 30-second
/// request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: CorsOrigins::List(vec!["http://localhost:5173".parse().unwrap()]),
        request_timeout_secs: 30,
        database: unreachable_database(),
        run_migrations: false,
        log_format: LogFormat::Pretty,
    }
}

/// Database settings pointing at a port nothing listens on.
pub fn unreachable_database() -> DatabaseConfig {
    DatabaseConfig {
        url: None,
        host: "127.0.0.1".to_string(),
        port: 1,
        user: "portfolio".to_string(),
        password: String::new(),
        database: "portfolio".to_string(),
        max_connections: 2,
        acquire_timeout: Duration::from_millis(250),
    }
}

/// Build the full application router (same middleware stack as `main.rs`)
/// around the given store and notifier.
pub fn build_test_app(
    store: Arc<dyn PortfolioStore>,
    notifier: Arc<dyn ContactNotifier>,
) -> Router {
    let state = AppState { store, notifier };
    build_app_router(state, &test_config())
}

/// Convenience: app over an in-memory store and a notifier that succeeds.
pub fn app_with_store(store: InMemoryStore) -> Router {
    build_test_app(Arc::new(store), Arc::new(ScriptedNotifier::default()))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a raw body, with a `content-type` header only when one is given.
pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> Response {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    app.oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub fn record(value: serde_json::Value) -> Record {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}
