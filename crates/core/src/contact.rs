//! Contact-form submissions.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Subject line of the operator notification email.
pub const NOTIFICATION_SUBJECT: &str = "New Contact Form Submission";

/// A contact-form submission as posted by the caller.
///
/// Fields are not validated; any of them may be missing, in which case the
/// column is stored as `NULL` and left to the schema to accept or reject.
/// Non-string values are kept as their JSON text (`42`, `true`, `["a"]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(default, deserialize_with = "any_as_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "any_as_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "any_as_text")]
    pub message: Option<String>,
}

fn any_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

impl ContactMessage {
    /// Read a submission from a raw JSON request body.
    ///
    /// An empty body, or any JSON value other than an object, yields a
    /// submission with every field missing. Only unparseable JSON is an error.
    pub fn from_json_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        match serde_json::from_slice::<Value>(body)? {
            object @ Value::Object(_) => serde_json::from_value(object),
            _ => Ok(Self::default()),
        }
    }

    /// Plain-text body of the operator notification.
    pub fn notification_body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nMessage: {}",
            self.name.as_deref().unwrap_or_default(),
            self.email.as_deref().unwrap_or_default(),
            self.message.as_deref().unwrap_or_default(),
        )
    }
}
