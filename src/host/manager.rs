// file: src/host/manager.rs
// version: 1.2.0
// guid: 1a84f6e2-9c05-4d78-b3a1-60e24c97d8b5

//! Lifecycle of the Sunshine host service
//!
//! Sunshine runs as its own process and owns its own state; this manager
//! only locates the executable, starts it detached, checks whether its
//! admin endpoint answers, and drives the one-off `--creds` bootstrap.

use crate::process::{spawn_detached, ExecutableLocator};
use crate::{LauncherError, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, error, info};

/// Port of Sunshine's local web/API endpoint
pub const ADMIN_PORT: u16 = 47990;

/// Sunshine's admin web UI
pub const WEB_UI_URL: &str = "https://localhost:47990";

/// Manager for the Sunshine host service
pub struct HostManager {
    locator: ExecutableLocator,
}

impl HostManager {
    /// Create a manager around an executable locator
    pub fn new(locator: ExecutableLocator) -> Self {
        Self { locator }
    }

    /// Resolve the Sunshine executable, if installed anywhere known
    pub fn locate(&self) -> Option<PathBuf> {
        self.locator.locate()
    }

    /// Start Sunshine detached. An explicit path beats the locator.
    pub fn start_service(&self, explicit_path: Option<&Path>) -> Result<String> {
        let path = match explicit_path {
            Some(path) => path.to_path_buf(),
            None => self.locate().ok_or_else(|| {
                LauncherError::not_configured("Sunshine")
            })?,
        };

        spawn_detached(&path, std::iter::empty::<&str>())?;
        Ok("Sunshine started.".to_string())
    }

    /// Whether Sunshine's admin endpoint is currently reachable
    pub async fn is_running(&self) -> bool {
        probe_port("localhost", ADMIN_PORT, Duration::from_secs(1)).await
    }

    /// Set Sunshine's admin credentials via its `--creds` flag.
    ///
    /// This replaces the browser-based first-run onboarding and must happen
    /// before the service is started normally.
    pub async fn initialize_credentials(&self, username: &str, password: &str) -> Result<String> {
        let exe = self
            .locate()
            .ok_or_else(|| LauncherError::not_configured("Sunshine"))?;

        if username.is_empty() || password.is_empty() {
            return Err(LauncherError::config("username and password are required"));
        }

        // Never log the password
        info!(
            "Initializing Sunshine credentials via: {} --creds {} ********",
            exe.display(),
            username
        );

        let mut command = tokio::process::Command::new(&exe);
        command.args(["--creds", username, password]);
        if let Some(parent) = exe.parent() {
            command.current_dir(parent);
        }

        let output = command
            .output()
            .await
            .map_err(|e| LauncherError::process(format!("failed to run Sunshine --creds: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!("Sunshine --creds failed ({}): {}", output.status, stderr);
            let message = if stderr.is_empty() {
                "failed to set credentials".to_string()
            } else {
                stderr
            };
            return Err(LauncherError::process(message));
        }

        info!("Sunshine credentials initialized");
        Ok("Credentials initialized.".to_string())
    }

    /// URL of the admin web UI
    pub fn web_ui_url(&self) -> &'static str {
        WEB_UI_URL
    }
}

/// TCP reachability probe.
///
/// Timeout, refusal, and every other socket error all read as "not
/// reachable"; the caller only learns a boolean.
pub async fn probe_port(host: &str, port: u16, limit: Duration) -> bool {
    match timeout(limit, TcpStream::connect((host, port))).await {
        Ok(Ok(_)) => true,
        Ok(Err(e)) => {
            debug!("Probe of {}:{} failed: {}", host, port, e);
            false
        }
        Err(_) => {
            debug!("Probe of {}:{} timed out", host, port);
            false
        }
    }
}
