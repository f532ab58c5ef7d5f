//! Wire types for the Waapy API.

use serde::{Deserialize, Serialize};

/// Body of `POST /n8n/messages/send-text`. The provider reuses this
/// endpoint for media sends; the media fields ride inside `message`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SendMessageBody {
    pub connection_name: String,
    pub recipient: String,
    pub message: MessagePayload,
}

/// Message envelope. At most one of `media_url`/`media_base64` is set.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MessagePayload {
    pub body: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_base64: Option<String>,
}

impl MessagePayload {
    pub fn text(body: String) -> Self {
        Self {
            body,
            kind: "text",
            media_url: None,
            media_base64: None,
        }
    }
}

/// Response of `GET /n8n/connections`. A missing `connections` field
/// deserializes to an empty list.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ConnectionsResponse {
    #[serde(default)]
    pub connections: Vec<ConnectionEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConnectionEntry {
    pub name: String,
}
