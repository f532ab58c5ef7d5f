//! Per-operation dispatch onto the Waapy API.

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;

use async_trait::async_trait;
use base64::Engine;
use serde_json::{json, Value};

use waapy_protocols::{
    BinaryPayload, ConnectionOption, DispatchError, ImageSource, InputItem, OperationRequest,
};

use crate::http::WaapyClient;
use crate::wire::{ConnectionsResponse, MessagePayload, SendMessageBody};

const SEND_TEXT_PATH: &str = "n8n/messages/send-text";
const CONNECTIONS_PATH: &str = "n8n/connections";

/// Seam between the batch pipeline and the HTTP-backed dispatcher.
#[async_trait]
pub trait Dispatch {
    /// Resolve one request into exactly one outbound API call.
    async fn dispatch(
        &self,
        request: &OperationRequest,
        item: &InputItem,
    ) -> Result<Value, DispatchError>;
}

/// HTTP-backed operation dispatcher.
///
/// Transport and status failures propagate unchanged to the caller; no
/// retries, no response-shape validation beyond the array/scalar unwrap
/// of [`normalize`].
pub struct Dispatcher {
    client: WaapyClient,
}

impl Dispatcher {
    pub fn new(client: WaapyClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &WaapyClient {
        &self.client
    }

    async fn send_text(
        &self,
        connection_name: &str,
        recipient: &str,
        text: &str,
    ) -> Result<Value, DispatchError> {
        let body = SendMessageBody {
            connection_name: connection_name.to_string(),
            recipient: recipient.to_string(),
            message: MessagePayload::text(text.to_string()),
        };
        let response = self.client.post(SEND_TEXT_PATH, &body).await?;
        Ok(normalize(response))
    }

    async fn send_image(
        &self,
        connection_name: &str,
        recipient: &str,
        source: &ImageSource,
        caption: Option<&str>,
        item: &InputItem,
    ) -> Result<Value, DispatchError> {
        let mut message = MessagePayload::text(caption.unwrap_or_default().to_string());
        match source {
            ImageSource::Url { media_url } => {
                message.media_url = Some(media_url.clone());
            }
            ImageSource::Upload { binary_property } => {
                // Fails before any HTTP call when the attachment is missing.
                let payload = item
                    .binary
                    .get(binary_property)
                    .ok_or_else(|| DispatchError::MissingBinaryData(binary_property.clone()))?;
                message.media_base64 = Some(data_uri(payload));
            }
        }

        let body = SendMessageBody {
            connection_name: connection_name.to_string(),
            recipient: recipient.to_string(),
            message,
        };
        let response = self.client.post(SEND_TEXT_PATH, &body).await?;
        Ok(normalize(response))
    }

    /// List selectable connections, optionally filtered server-side.
    ///
    /// The filter rides through as the `searchParam` query parameter and
    /// is never re-applied locally.
    pub async fn search_connections(
        &self,
        filter: Option<&str>,
    ) -> Result<Vec<ConnectionOption>, DispatchError> {
        let mut query = Vec::new();
        if let Some(filter) = filter {
            query.push(("searchParam", filter));
        }
        let response = self.client.get(CONNECTIONS_PATH, &query).await?;

        let parsed: ConnectionsResponse = serde_json::from_value(response).unwrap_or_default();
        Ok(parsed
            .connections
            .into_iter()
            .map(|entry| ConnectionOption {
                value: entry.name.clone(),
                name: entry.name,
            })
            .collect())
    }
}

#[async_trait]
impl Dispatch for Dispatcher {
    async fn dispatch(
        &self,
        request: &OperationRequest,
        item: &InputItem,
    ) -> Result<Value, DispatchError> {
        match request {
            OperationRequest::SendText {
                connection_name,
                recipient,
                text,
            } => self.send_text(connection_name, recipient, text).await,
            OperationRequest::SendImage {
                connection_name,
                recipient,
                source,
                caption,
            } => {
                self.send_image(connection_name, recipient, source, caption.as_deref(), item)
                    .await
            }
            OperationRequest::SearchConnections { filter } => {
                let options = self.search_connections(filter.as_deref()).await?;
                Ok(Value::Array(
                    options
                        .into_iter()
                        .map(|o| json!({ "name": o.name, "value": o.value }))
                        .collect(),
                ))
            }
        }
    }
}

fn data_uri(payload: &BinaryPayload) -> String {
    format!(
        "data:{};base64,{}",
        payload.mime_type,
        base64::engine::general_purpose::STANDARD.encode(&payload.data)
    )
}

/// Unwrap the provider's heterogeneous response shapes into one
/// structured value: first element of an array, the value otherwise.
fn normalize(response: Value) -> Value {
    match response {
        Value::Array(mut items) => {
            if items.is_empty() {
                Value::Null
            } else {
                items.remove(0)
            }
        }
        other => other,
    }
}
