//! Credential snapshot for one workflow run.

use serde::Deserialize;
use url::Url;

/// Read-only credential snapshot supplied by the host's credential store.
///
/// Immutable per execution; the integration only borrows it for the
/// duration of one run.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    /// Base URL of the Waapy API server.
    pub server_url: Url,
    /// API key sent as a bearer token on every call.
    pub api_key: String,
}

impl Credentials {
    pub fn new(server_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            server_url,
            api_key: api_key.into(),
        }
    }
}

// The API key must never end up in logs or error output.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("server_url", &self.server_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}
