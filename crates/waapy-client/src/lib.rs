//! # Waapy Client
//!
//! Outbound half of the Waapy integration: an authenticated HTTP client,
//! the per-operation dispatcher and the batch execution pipeline.
//!
//! Control flow runs [`batch::execute_batch`] -> [`Dispatcher`] ->
//! [`WaapyClient`] -> provider. Errors propagate upward unchanged; the
//! batch pipeline is the only recovery point.

pub mod batch;
pub mod dispatch;
pub mod http;
mod wire;

pub use batch::{execute_batch, BatchItem, FailurePolicy};
pub use dispatch::{Dispatch, Dispatcher};
pub use http::WaapyClient;
