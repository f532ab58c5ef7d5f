//! Outbound operation requests.

#[cfg(test)]
#[path = "operation_tests.rs"]
mod tests;

use serde::{Deserialize, Serialize};

/// One logical operation, mapped to exactly one outbound HTTP call.
///
/// Unsupported resource/operation combinations cannot be represented:
/// dispatch matches exhaustively on this enum instead of comparing
/// resource and operation name strings at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "camelCase")]
pub enum OperationRequest {
    /// Send a text message through a named connection.
    #[serde(rename_all = "camelCase")]
    SendText {
        /// Name of the connection to send through.
        connection_name: String,
        /// Recipient phone number in international format. Not validated
        /// here; the provider rejects malformed numbers.
        recipient: String,
        /// Message body.
        text: String,
    },
    /// Send an image message through a named connection.
    #[serde(rename_all = "camelCase")]
    SendImage {
        connection_name: String,
        recipient: String,
        /// Where the image comes from.
        #[serde(flatten)]
        source: ImageSource,
        /// Optional caption, sent as the message body.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    /// List selectable connections, optionally filtered server-side.
    #[serde(rename_all = "camelCase")]
    SearchConnections {
        /// Filter passed through as a query parameter; never re-applied
        /// locally.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        filter: Option<String>,
    },
}

/// Source of an image to send. Exactly one of the wire fields `mediaUrl`
/// or `mediaBase64` ends up populated, selected by this mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "imageUploadMethod", rename_all = "camelCase")]
pub enum ImageSource {
    /// Remote URL, passed through verbatim.
    #[serde(rename_all = "camelCase")]
    Url { media_url: String },
    /// Named binary attachment on the input item, sent inline as a
    /// base64 data URI.
    #[serde(rename_all = "camelCase")]
    Upload { binary_property: String },
}

/// One entry of a searchable connection selection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionOption {
    /// Display name.
    pub name: String,
    /// Value submitted when the entry is selected; the connection name.
    pub value: String,
}
