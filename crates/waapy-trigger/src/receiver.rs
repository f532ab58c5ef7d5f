//! Inbound event receiver.

#[cfg(test)]
#[path = "receiver_tests.rs"]
mod tests;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use waapy_protocols::InboundEvent;

/// Receiver configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiverConfig {
    /// Path the provider pushes events to.
    #[serde(default = "default_path")]
    pub path: String,
    /// Capacity of the inbound event queue.
    #[serde(default = "default_capacity")]
    pub channel_capacity: usize,
}

fn default_path() -> String {
    "webhook".to_string()
}

fn default_capacity() -> usize {
    256
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            channel_capacity: default_capacity(),
        }
    }
}

/// Shared receiver state.
pub struct ReceiverState {
    events_tx: mpsc::Sender<InboundEvent>,
}

/// Build the receiver: an Axum router accepting provider pushes, plus
/// the stream of forwarded events.
pub fn create_receiver(config: &ReceiverConfig) -> (Router, mpsc::Receiver<InboundEvent>) {
    let (events_tx, events_rx) = mpsc::channel(config.channel_capacity);
    let state = Arc::new(ReceiverState { events_tx });

    let route = format!("/{}", config.path.trim_start_matches('/'));
    let router = Router::new()
        .route(&route, post(receive_event))
        .with_state(state);

    (router, events_rx)
}

/// Accept one pushed event and acknowledge immediately.
///
/// The body is forwarded unmodified; the response never waits on
/// downstream processing, and a full or closed queue only drops the
/// event. No signature verification, no event-kind filtering.
async fn receive_event(
    State(state): State<Arc<ReceiverState>>,
    Json(payload): Json<Value>,
) -> StatusCode {
    let event = InboundEvent::new(payload);
    debug!(event_id = %event.id, "inbound event received");

    if let Err(error) = state.events_tx.try_send(event) {
        warn!(%error, "inbound event dropped");
    }

    StatusCode::OK
}
