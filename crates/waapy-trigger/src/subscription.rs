//! Remote webhook subscription lifecycle.

#[cfg(test)]
#[path = "subscription_tests.rs"]
mod tests;

use serde_json::{json, Value};
use tracing::{debug, warn};

use waapy_client::WaapyClient;
use waapy_protocols::{WebhookError, WebhookSubscription};

const WEBHOOKS_PATH: &str = "n8n/webhooks";

/// Drives the provider-side registration recorded in a
/// [`WebhookSubscription`].
///
/// The host guarantees serialized lifecycle calls per node instance, so
/// no locking happens here. The subscription record stays the single
/// source of truth for whether a remote registration exists.
pub struct SubscriptionManager {
    client: WaapyClient,
}

impl SubscriptionManager {
    pub fn new(client: WaapyClient) -> Self {
        Self { client }
    }

    /// Whether the recorded registration still exists remotely.
    ///
    /// Returns `false` without any network call when nothing is
    /// recorded. Any remote failure - a definitive 404 as much as a
    /// transient transport error - also yields `false`; the local record
    /// is left untouched either way.
    pub async fn check_exists(&self, subscription: &WebhookSubscription) -> bool {
        let Some(remote_id) = &subscription.remote_id else {
            return false;
        };

        match self
            .client
            .get(&format!("{WEBHOOKS_PATH}/{remote_id}"), &[])
            .await
        {
            Ok(_) => true,
            Err(error) => {
                warn!(%remote_id, %error, "webhook verification failed");
                false
            }
        }
    }

    /// Register the subscription remotely and record the assigned ID.
    ///
    /// Callers must invoke [`Self::check_exists`] first; this method does
    /// not guard against overwriting a live registration. A 2xx response
    /// without an `id` field counts as failure and leaves the record
    /// unregistered.
    pub async fn create(&self, subscription: &mut WebhookSubscription) -> Result<(), WebhookError> {
        if subscription.callback_url.is_empty() {
            return Err(WebhookError::Configuration(
                "no webhook callback URL could be determined".to_string(),
            ));
        }

        let body = json!({
            "url": subscription.callback_url,
            "events": subscription.events,
        });
        let response = self.client.post(WEBHOOKS_PATH, &body).await?;

        let Some(id) = response.get("id").and_then(Value::as_str) else {
            return Err(WebhookError::RemoteRegistration(
                "registration response carried no id".to_string(),
            ));
        };

        debug!(remote_id = id, "webhook registered");
        subscription.remote_id = Some(id.to_string());
        Ok(())
    }

    /// Remove the remote registration and clear the local record.
    ///
    /// No-op returning `false` when nothing is recorded. A failed remote
    /// delete also returns `false` and keeps the record, so local and
    /// remote state can disagree until the next lifecycle pass.
    pub async fn delete(&self, subscription: &mut WebhookSubscription) -> bool {
        let Some(remote_id) = subscription.remote_id.clone() else {
            return false;
        };

        match self
            .client
            .delete(&format!("{WEBHOOKS_PATH}/{remote_id}"))
            .await
        {
            Ok(_) => {
                debug!(%remote_id, "webhook removed");
                subscription.remote_id = None;
                true
            }
            Err(error) => {
                warn!(%remote_id, %error, "webhook removal failed");
                false
            }
        }
    }
}
