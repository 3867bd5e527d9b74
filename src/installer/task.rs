// file: src/installer/task.rs
// version: 1.1.0
// guid: 92c5e0d8-7b14-4f6a-a3c9-48e16d07b5f2

//! Background execution of install runs
//!
//! An install is fire-and-forget: once spawned it runs to completion or
//! error, with no cancellation. The consumer gets every progress event in
//! non-decreasing percent order followed by exactly one terminal event, and
//! is responsible for discarding events it no longer cares about.

use crate::installer::ReleaseInstaller;
use crate::Result;
use std::path::PathBuf;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Event stream of one install run
#[derive(Debug)]
pub enum InstallEvent {
    /// Status text plus percent complete in [0, 100]
    Progress { message: String, percent: u8 },
    /// Terminal outcome, sent exactly once after all progress events.
    /// `Ok(None)` means the archive extracted but the executable was missing.
    Finished(Result<Option<PathBuf>>),
}

/// Start an install on a background task and return its event stream.
pub fn spawn_install(
    installer: ReleaseInstaller,
    target_dir: PathBuf,
) -> UnboundedReceiver<InstallEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let progress_tx = tx.clone();
        let progress = move |message: &str, percent: u8| {
            let _ = progress_tx.send(InstallEvent::Progress {
                message: message.to_string(),
                percent,
            });
        };

        let result = installer.install(&target_dir, &progress).await;
        // Receiver may be gone already; nothing to do about it
        let _ = tx.send(InstallEvent::Finished(result));
    });

    rx
}
