//! Authenticated HTTP transport for the Waapy API.

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;

use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use waapy_protocols::{ClientError, Credentials};

const HEALTH_PATH: &str = "n8n/health";

/// Thin wrapper over `reqwest` that owns the credential snapshot for one
/// run.
///
/// Every call carries bearer auth and JSON content negotiation. Non-2xx
/// responses map to [`ClientError::Status`], everything below that to
/// [`ClientError::Transport`]. No retries happen here; retry policy, if
/// any, belongs to callers. The transport default timeout applies.
#[derive(Debug, Clone)]
pub struct WaapyClient {
    credentials: Credentials,
    http: Client,
}

impl WaapyClient {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            http: Client::new(),
        }
    }

    /// Issue a GET against an API path with optional query parameters.
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ClientError> {
        let request = self.http.get(self.endpoint(path)).query(query);
        self.send(request, path).await
    }

    /// Issue a POST with a JSON body against an API path.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ClientError> {
        let request = self.http.post(self.endpoint(path)).json(body);
        self.send(request, path).await
    }

    /// Issue a DELETE against an API path.
    pub async fn delete(&self, path: &str) -> Result<Value, ClientError> {
        let request = self.http.delete(self.endpoint(path));
        self.send(request, path).await
    }

    /// Credential test against the provider's health endpoint.
    pub async fn test_credentials(&self) -> Result<(), ClientError> {
        self.get(HEALTH_PATH, &[]).await.map(|_| ())
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> Result<Value, ClientError> {
        let response = request
            .bearer_auth(&self.credentials.api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(path, status = status.as_u16(), "Waapy API call succeeded");

        if body.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| ClientError::Transport(e.to_string()))
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.credentials.server_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
