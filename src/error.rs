// file: src/error.rs
// version: 1.2.0
// guid: 8f41c2da-6b3e-4c19-9a75-d02e8b6f3c41

use thiserror::Error;

/// Result type alias for the launcher
pub type Result<T> = std::result::Result<T, LauncherError>;

/// Error types for the GameBeam launcher
#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("No matching release asset: {0}")]
    AssetNotFound(String),

    #[error("{0} is not installed or configured")]
    NotConfigured(String),

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Service not reachable: {0}")]
    Unreachable(String),

    #[error("Process error: {0}")]
    Process(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl LauncherError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a new "no matching asset" error
    pub fn asset_not_found(msg: impl Into<String>) -> Self {
        Self::AssetNotFound(msg.into())
    }

    /// Create a new "tool not configured" error
    pub fn not_configured(msg: impl Into<String>) -> Self {
        Self::NotConfigured(msg.into())
    }

    /// Create a new authentication error
    pub fn auth_failed(msg: impl Into<String>) -> Self {
        Self::AuthFailed(msg.into())
    }

    /// Create a new "service not reachable" error
    pub fn unreachable(msg: impl Into<String>) -> Self {
        Self::Unreachable(msg.into())
    }

    /// Create a new process error
    pub fn process(msg: impl Into<String>) -> Self {
        Self::Process(msg.into())
    }

    /// Create a new other error
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
