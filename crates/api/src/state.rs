use std::sync::Arc;

use folio_db::PortfolioStore;
use folio_notify::ContactNotifier;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Relational store; owns the connection pool.
    pub store: Arc<dyn PortfolioStore>,
    /// Operator notification channel for contact submissions.
    pub notifier: Arc<dyn ContactNotifier>,
}
