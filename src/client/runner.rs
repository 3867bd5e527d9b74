// file: src/client/runner.rs
// version: 1.1.0
// guid: 9e46d2a8-0b75-4f13-ac69-d481f0c7e529

//! Launching Moonlight sessions

use crate::process::{spawn_detached, ExecutableLocator};
use crate::{LauncherError, Result};
use std::path::PathBuf;
use tracing::info;

/// Session parameters for a Moonlight stream
#[derive(Debug, Clone)]
pub struct StreamSettings {
    /// Host to connect to (IP or hostname)
    pub host: String,
    /// Application to stream, "Desktop" streams the whole screen
    pub app_name: String,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub bitrate_kbps: u32,
    pub vsync: bool,
}

impl StreamSettings {
    /// Settings for `host` with the stock defaults
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            app_name: "Desktop".to_string(),
            width: 1920,
            height: 1080,
            fps: 60,
            bitrate_kbps: 20000,
            vsync: true,
        }
    }

    /// Command-line arguments in Moonlight's `stream` format
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "stream".to_string(),
            self.host.clone(),
            self.app_name.clone(),
            "--resolution".to_string(),
            format!("{}x{}", self.width, self.height),
            "--fps".to_string(),
            self.fps.to_string(),
            "--bitrate".to_string(),
            self.bitrate_kbps.to_string(),
        ];
        args.push(if self.vsync { "--vsync" } else { "--no-vsync" }.to_string());
        // One session per invocation; Moonlight exits when the stream ends
        args.push("--quit-after".to_string());
        args
    }
}

/// Runner for the Moonlight client executable
pub struct ClientRunner {
    locator: ExecutableLocator,
}

impl ClientRunner {
    /// Create a runner around an executable locator
    pub fn new(locator: ExecutableLocator) -> Self {
        Self { locator }
    }

    /// Resolve the Moonlight executable, if installed anywhere known
    pub fn locate(&self) -> Option<PathBuf> {
        self.locator.locate()
    }

    /// Start a streaming session, detached.
    pub fn launch(&self, settings: &StreamSettings) -> Result<String> {
        let exe = self
            .locate()
            .ok_or_else(|| LauncherError::not_configured("Moonlight"))?;

        let args = settings.to_args();
        info!("Launching Moonlight: {} {}", exe.display(), args.join(" "));
        spawn_detached(&exe, &args)?;
        Ok("Moonlight launched.".to_string())
    }

    /// Open the Moonlight GUI with no arguments, for interactive pairing.
    pub fn open_gui(&self) -> Result<String> {
        let exe = self
            .locate()
            .ok_or_else(|| LauncherError::not_configured("Moonlight"))?;

        spawn_detached(&exe, std::iter::empty::<&str>())?;
        Ok("Moonlight GUI opened.".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_args_defaults() {
        let settings = StreamSettings::new("192.168.1.50");
        assert_eq!(
            settings.to_args(),
            vec![
                "stream",
                "192.168.1.50",
                "Desktop",
                "--resolution",
                "1920x1080",
                "--fps",
                "60",
                "--bitrate",
                "20000",
                "--vsync",
                "--quit-after",
            ]
        );
    }

    #[test]
    fn test_stream_args_no_vsync() {
        let mut settings = StreamSettings::new("10.0.0.2");
        settings.vsync = false;
        settings.width = 2560;
        settings.height = 1440;
        settings.fps = 120;

        let args = settings.to_args();
        assert!(args.contains(&"--no-vsync".to_string()));
        assert!(!args.contains(&"--vsync".to_string()));
        assert!(args.contains(&"2560x1440".to_string()));
        assert!(args.contains(&"120".to_string()));
    }

    #[test]
    fn test_launch_without_executable() {
        let dir = tempfile::TempDir::new().unwrap();
        let locator = ExecutableLocator::new("Moonlight", vec![dir.path().join("absent.exe")]);
        let runner = ClientRunner::new(locator);

        let err = runner.launch(&StreamSettings::new("10.0.0.2")).unwrap_err();
        assert!(matches!(err, LauncherError::NotConfigured(_)));
    }
}
