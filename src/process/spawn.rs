// file: src/process/spawn.rs
// version: 1.0.1
// guid: 3f61a8d0-c974-4e2b-95c3-1b07d6e48f25

//! Detached process spawning

use crate::{LauncherError, Result};
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::info;

/// Spawn `executable` with `args` as a detached process.
///
/// The child is launched from the executable's own directory (both tools
/// load resources relative to it) and is never waited on; the launcher
/// holds no handle to it afterwards.
pub fn spawn_detached<I, S>(executable: &Path, args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(executable);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    if let Some(parent) = executable.parent() {
        if !parent.as_os_str().is_empty() {
            command.current_dir(parent);
        }
    }

    command
        .spawn()
        .map_err(|e| LauncherError::process(format!("failed to start {}: {}", executable.display(), e)))?;

    info!("Started {}", executable.display());
    Ok(())
}
