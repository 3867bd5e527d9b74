// file: src/host/api.rs
// version: 1.2.0
// guid: b07d3e91-56fa-4c28-8b64-02c9e5d17a38

//! Minimal client for Sunshine's local admin API
//!
//! Covers only what pairing needs: submitting the PIN the Moonlight side
//! displays. Sunshine serves this API over HTTPS with a self-signed
//! certificate, so certificate verification is disabled for this one
//! localhost-only client.

use crate::host::ADMIN_PORT;
use crate::{LauncherError, Result};
use reqwest::StatusCode;
use serde_json::json;
use std::time::Duration;
use tracing::{info, warn};

/// Authenticated client for the Sunshine admin API
pub struct HostApi {
    client: reqwest::Client,
    base_url: String,
    username: Option<String>,
    password: Option<String>,
}

impl HostApi {
    /// Create a client with optional HTTP Basic credentials
    pub fn new(username: Option<String>, password: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .timeout(Duration::from_secs(5))
            .build()?;

        Ok(Self {
            client,
            base_url: format!("https://localhost:{}/api", ADMIN_PORT),
            username,
            password,
        })
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Submit the pairing PIN displayed by the client.
    ///
    /// 200 is success, 401 is an authentication problem with the stored
    /// credentials, and a refused connection means Sunshine is not running.
    pub async fn send_pin(&self, pin: &str) -> Result<String> {
        let url = format!("{}/pin", self.base_url);
        let mut request = self.client.post(&url).json(&json!({ "pin": pin }));
        if let Some(username) = &self.username {
            request = request.basic_auth(username, self.password.as_deref());
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) if e.is_connect() => {
                warn!("Sunshine is not reachable at {}", url);
                return Err(LauncherError::unreachable(
                    "Sunshine is not running or not reachable",
                ));
            }
            Err(e) => return Err(e.into()),
        };

        match response.status() {
            StatusCode::OK => {
                info!("PIN accepted by Sunshine");
                Ok("PIN accepted by Sunshine.".to_string())
            }
            StatusCode::UNAUTHORIZED => {
                warn!("PIN submission rejected: authentication failure");
                Err(LauncherError::auth_failed(
                    "check Sunshine username/password",
                ))
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                warn!("PIN submission failed: {} {}", status, body);
                Err(LauncherError::network(format!("error {}: {}", status, body)))
            }
        }
    }
}
