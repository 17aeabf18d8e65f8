//! Contact notification delivery via SMTP.
//!
//! [`EmailDelivery`] wraps the `lettre` async SMTP transport to send a
//! plain-text email to the site operator for each contact submission.
//! Configuration is loaded from environment variables; if `EMAIL_USER` is not
//! set, [`EmailConfig::from_env`] returns `None` and no mailer should be
//! constructed.

use async_trait::async_trait;
use folio_core::contact::{ContactMessage, NOTIFICATION_SUBJECT};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::ContactNotifier;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for notification failures.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The operator address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),

    /// No mail credentials were configured at startup.
    #[error("Email delivery is not configured")]
    NotConfigured,
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default relay; the operator mailbox is a Gmail account.
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Configuration for the SMTP notification service.
#[derive(Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// Account that authenticates and appears as the sender.
    pub user: String,
    pub password: String,
    /// Operator mailbox that receives notifications.
    pub to_address: String,
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("to_address", &self.to_address)
            .finish()
    }
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `EMAIL_USER` is not set, signalling that email
    /// delivery is not configured.
    ///
    /// | Variable     | Required | Default          |
    /// |--------------|----------|------------------|
    /// | `EMAIL_USER` | yes      | none             |
    /// | `EMAIL_PASS` | no       | empty            |
    /// | `EMAIL_TO`   | no       | `EMAIL_USER`     |
    /// | `SMTP_HOST`  | no       | `smtp.gmail.com` |
    /// | `SMTP_PORT`  | no       | `587`            |
    pub fn from_env() -> Option<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_vars<F>(var: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let user = var("EMAIL_USER").filter(|u| !u.is_empty())?;
        Some(Self {
            smtp_host: var("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            smtp_port: var("SMTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            password: var("EMAIL_PASS").unwrap_or_default(),
            to_address: var("EMAIL_TO").unwrap_or_else(|| user.clone()),
            user,
        })
    }
}

// ---------------------------------------------------------------------------
// EmailDelivery
// ---------------------------------------------------------------------------

/// Sends contact notifications to the operator via SMTP.
pub struct EmailDelivery {
    config: EmailConfig,
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailDelivery {
    /// Build the SMTP transport. No connection is opened until the first send.
    pub fn new(config: EmailConfig) -> Result<Self, NotificationError> {
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.user.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { config, mailer })
    }

    /// Assemble the notification email for a submission.
    ///
    /// The submitter's address becomes `Reply-To` when it parses; it is
    /// unvalidated input, so a malformed one is simply left out.
    pub fn build_message(&self, message: &ContactMessage) -> Result<Message, NotificationError> {
        let mut builder = Message::builder()
            .from(self.config.user.parse::<Mailbox>()?)
            .to(self.config.to_address.parse::<Mailbox>()?)
            .subject(NOTIFICATION_SUBJECT)
            .header(ContentType::TEXT_PLAIN);

        if let Some(reply_to) = message
            .email
            .as_deref()
            .and_then(|e| e.parse::<Mailbox>().ok())
        {
            builder = builder.reply_to(reply_to);
        }

        builder
            .body(message.notification_body())
            .map_err(|e| NotificationError::Build(e.to_string()))
    }
}

#[async_trait]
impl ContactNotifier for EmailDelivery {
    async fn notify(&self, message: &ContactMessage) -> Result<(), NotificationError> {
        let email = self.build_message(message)?;
        self.mailer.send(email).await?;

        tracing::info!(to = %self.config.to_address, "Contact notification email sent");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn config() -> EmailConfig {
        EmailConfig {
            smtp_host: "smtp.example.com".into(),
            smtp_port: 587,
            user: "operator@example.com".into(),
            password: "app-password".into(),
            to_address: "operator@example.com".into(),
        }
    }

    #[test]
    fn from_vars_returns_none_without_user() {
        assert!(EmailConfig::from_vars(vars(&[("EMAIL_PASS", "x")])).is_none());
        assert!(EmailConfig::from_vars(vars(&[("EMAIL_USER", "")])).is_none());
    }

    #[test]
    fn from_vars_applies_defaults() {
        let config = EmailConfig::from_vars(vars(&[("EMAIL_USER", "me@example.com")])).unwrap();

        assert_eq!(config.smtp_host, "smtp.gmail.com");
        assert_eq!(config.smtp_port, 587);
        assert_eq!(config.to_address, "me@example.com");
        assert_eq!(config.password, "");
    }

    #[test]
    fn from_vars_reads_overrides() {
        let config = EmailConfig::from_vars(vars(&[
            ("EMAIL_USER", "me@example.com"),
            ("EMAIL_PASS", "pw"),
            ("EMAIL_TO", "inbox@example.com"),
            ("SMTP_HOST", "mail.example.com"),
            ("SMTP_PORT", "2525"),
        ]))
        .unwrap();

        assert_eq!(config.smtp_host, "mail.example.com");
        assert_eq!(config.smtp_port, 2525);
        assert_eq!(config.to_address, "inbox@example.com");
        assert_eq!(config.password, "pw");
    }

    #[test]
    fn debug_output_redacts_password() {
        let rendered = format!("{:?}", config());
        assert!(!rendered.contains("app-password"));
    }

    #[test]
    fn message_carries_subject_and_reply_to() {
        let delivery = EmailDelivery::new(config()).unwrap();
        let message = ContactMessage {
            name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            message: Some("Hello".into()),
        };

        let email = delivery.build_message(&message).unwrap();

        assert_eq!(
            email.headers().get_raw("Subject"),
            Some("New Contact Form Submission")
        );
        assert!(email.headers().get_raw("Reply-To").is_some());
        let formatted = String::from_utf8(email.formatted()).unwrap();
        assert!(formatted.contains("Name: Ada"));
        assert!(formatted.contains("Message: Hello"));
    }

    #[test]
    fn malformed_submitter_email_is_not_used_as_reply_to() {
        let delivery = EmailDelivery::new(config()).unwrap();
        let message = ContactMessage {
            email: Some("not-an-email".into()),
            ..Default::default()
        };

        let email = delivery.build_message(&message).unwrap();

        assert!(email.headers().get_raw("Reply-To").is_none());
    }

    #[test]
    fn invalid_operator_address_is_an_error() {
        let delivery = EmailDelivery::new(EmailConfig {
            to_address: "nope".into(),
            ..config()
        })
        .unwrap();

        let result = delivery.build_message(&ContactMessage::default());

        assert_matches!(result, Err(NotificationError::Address(_)));
    }

    #[test]
    fn error_display_build() {
        let err = NotificationError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }
}
