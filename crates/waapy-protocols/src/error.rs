//! Error taxonomy for the Waapy integration.

use thiserror::Error;

use crate::item::ExecutionItem;

/// Failures from the HTTP client adapter.
///
/// No retries happen at this layer; retry policy, if any, belongs to
/// callers.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or protocol failure before a status code was received.
    #[error("network error: {0}")]
    Transport(String),

    /// Non-2xx response from the provider.
    #[error("API error: {status} - {body}")]
    Status { status: u16, body: String },
}

/// Failures raised while dispatching one operation.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Upload mode was selected without a resolvable binary attachment.
    #[error("no binary data found under property '{0}'")]
    MissingBinaryData(String),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Failures raised by the webhook subscription manager.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// No callback URL could be resolved for the subscription.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A 2xx registration response was missing the expected identifier.
    #[error("webhook registration failed: {0}")]
    RemoteRegistration(String),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Fail-fast batch abort, tagged with the failing item's index.
#[derive(Debug, Error)]
#[error("item {item_index}: {source}")]
pub struct BatchError {
    /// Index of the input item that failed.
    pub item_index: usize,
    /// The underlying dispatch failure.
    pub source: DispatchError,
    /// Output slots produced strictly before the failing index.
    pub completed: Vec<ExecutionItem>,
}
