//! # Waapy Trigger
//!
//! Inbound half of the Waapy integration: the provider-side webhook
//! subscription lifecycle, invoked at workflow activation and
//! deactivation, and the local receiver endpoint events are pushed to.
//!
//! Inbound events bypass the dispatch pipeline entirely: they flow
//! receiver -> output, unmodified.

pub mod receiver;
pub mod subscription;

pub use receiver::{create_receiver, ReceiverConfig};
pub use subscription::SubscriptionManager;
