//! Operator notifications for contact-form submissions.
//!
//! - [`ContactNotifier`] is the seam the contact handler depends on.
//! - [`EmailDelivery`] sends the notification over SMTP via `lettre`.
//! - [`UnconfiguredNotifier`] stands in when no mail credentials are set.

pub mod email;

use async_trait::async_trait;
use folio_core::contact::ContactMessage;

pub use email::{EmailConfig, EmailDelivery, NotificationError};

/// Sends one notification per stored contact submission.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, message: &ContactMessage) -> Result<(), NotificationError>;
}

/// Notifier used when email is not configured. Every send fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredNotifier;

#[async_trait]
impl ContactNotifier for UnconfiguredNotifier {
    async fn notify(&self, _message: &ContactMessage) -> Result<(), NotificationError> {
        Err(NotificationError::NotConfigured)
    }
}
