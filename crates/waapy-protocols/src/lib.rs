//! # Waapy Protocols
//!
//! Shared type and error definitions for the Waapy workflow integration.
//! Contains only data types - no I/O.
//!
//! ## Core Types
//!
//! - [`Credentials`] - Read-only credential snapshot for one run
//! - [`OperationRequest`] - One logical outbound operation
//! - [`InputItem`] / [`ExecutionItem`] - Batch input and output records
//! - [`WebhookSubscription`] - Host-persisted registration record
//! - [`InboundEvent`] - Event pushed by the provider

pub mod credentials;
pub mod error;
pub mod item;
pub mod operation;
pub mod webhook;

pub use credentials::Credentials;
pub use error::{BatchError, ClientError, DispatchError, WebhookError};
pub use item::{BinaryPayload, ExecutionItem, InputItem};
pub use operation::{ConnectionOption, ImageSource, OperationRequest};
pub use webhook::{EventKind, InboundEvent, WebhookSubscription};
