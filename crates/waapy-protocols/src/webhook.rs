//! Webhook subscription state and inbound events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event kinds a subscription can listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// A new message was received.
    #[serde(rename = "message.received")]
    MessageReceived,
    /// A message status changed (sent, delivered, read).
    #[serde(rename = "message.status")]
    MessageStatusUpdated,
}

/// Host-persisted registration record.
///
/// Owned and durably stored by the host's per-node static-data store;
/// this record is the single source of truth for whether a remote
/// subscription is currently registered. At most one `remote_id` is
/// active per workflow instance, and the host guarantees serialized
/// lifecycle access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookSubscription {
    /// Provider-assigned identifier; absent while unregistered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,
    /// Callback URL the provider pushes events to.
    pub callback_url: String,
    /// Event kinds the subscription listens for.
    pub events: Vec<EventKind>,
}

impl WebhookSubscription {
    pub fn new(callback_url: impl Into<String>, events: Vec<EventKind>) -> Self {
        Self {
            remote_id: None,
            callback_url: callback_url.into(),
            events,
        }
    }

    /// Whether a remote registration is currently recorded locally.
    pub fn is_registered(&self) -> bool {
        self.remote_id.is_some()
    }
}

/// One event pushed by the provider to the receiver endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct InboundEvent {
    /// Locally assigned delivery ID, for log correlation only.
    pub id: String,
    /// When the event arrived.
    pub received_at: DateTime<Utc>,
    /// Raw provider payload, forwarded unmodified.
    pub payload: Value,
}

impl InboundEvent {
    pub fn new(payload: Value) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            received_at: Utc::now(),
            payload,
        }
    }
}
