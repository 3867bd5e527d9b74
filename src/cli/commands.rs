// file: src/cli/commands.rs
// version: 1.3.0
// guid: 5a93c0e7-18f4-4d26-9b70-e64d218c5f39

//! Command handlers
//!
//! Each handler owns one user action end to end: run the operation, persist
//! whatever it learned into the config store, and print a plain-language
//! result. Nothing here retries; a failure always waits for the user to act
//! again.

use crate::client::{ClientRunner, StreamSettings};
use crate::config::{
    ConfigStore, KEY_MOONLIGHT_PATH, KEY_SUNSHINE_PASS, KEY_SUNSHINE_PATH, KEY_SUNSHINE_USER,
};
use crate::host::{HostApi, HostManager, WEB_UI_URL};
use crate::installer::{spawn_install, InstallEvent, ReleaseInstaller, ToolRelease};
use crate::process::{moonlight_well_known, sunshine_well_known, ExecutableLocator};
use crate::utils::code::{decode_connection_code, encode_connection_code};
use crate::utils::netinfo::local_ip;
use crate::{installer, LauncherError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Default installation directory for a tool
fn default_install_dir(tool: &ToolRelease) -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gamebeam")
        .join(tool.name.to_lowercase())
}

fn sunshine_manager(store: &ConfigStore, override_path: Option<PathBuf>) -> HostManager {
    let locator = ExecutableLocator::new("Sunshine", sunshine_well_known())
        .with_custom_path(store.get(KEY_SUNSHINE_PATH).map(PathBuf::from))
        .with_override(override_path);
    HostManager::new(locator)
}

fn moonlight_runner(store: &ConfigStore, override_path: Option<PathBuf>) -> ClientRunner {
    let locator = ExecutableLocator::new("Moonlight", moonlight_well_known())
        .with_custom_path(store.get(KEY_MOONLIGHT_PATH).map(PathBuf::from))
        .with_override(override_path);
    ClientRunner::new(locator)
}

/// Drive one install run, rendering its event stream as a progress bar.
async fn run_install(tool: ToolRelease, target_dir: PathBuf) -> Result<Option<PathBuf>> {
    println!("Installing {} to {}", tool.name, target_dir.display());

    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let mut events = spawn_install(ReleaseInstaller::new(tool), target_dir);
    let mut outcome = None;

    while let Some(event) = events.recv().await {
        match event {
            InstallEvent::Progress { message, percent } => {
                bar.set_position(u64::from(percent));
                bar.set_message(message);
            }
            InstallEvent::Finished(result) => {
                outcome = Some(result);
            }
        }
    }
    bar.finish_and_clear();

    outcome.unwrap_or_else(|| Err(LauncherError::other("install task ended without a result")))
}

/// `host install`
pub async fn host_install(store: &mut ConfigStore, dir: Option<PathBuf>) -> Result<()> {
    let target_dir = dir.unwrap_or_else(|| default_install_dir(&installer::SUNSHINE));

    match run_install(installer::SUNSHINE, target_dir).await? {
        Some(exe_path) => {
            store.set(KEY_SUNSHINE_PATH, exe_path.display().to_string())?;
            println!("Sunshine installed: {}", exe_path.display());
        }
        None => {
            println!(
                "Download succeeded but sunshine.exe was not found in the archive; \
                 the release may be broken. Configure the path manually if you know it."
            );
        }
    }
    Ok(())
}

/// `client install`
pub async fn client_install(store: &mut ConfigStore, dir: Option<PathBuf>) -> Result<()> {
    let target_dir = dir.unwrap_or_else(|| default_install_dir(&installer::MOONLIGHT));

    match run_install(installer::MOONLIGHT, target_dir).await? {
        Some(exe_path) => {
            store.set(KEY_MOONLIGHT_PATH, exe_path.display().to_string())?;
            println!("Moonlight installed: {}", exe_path.display());
        }
        None => {
            println!(
                "Download succeeded but Moonlight.exe was not found in the archive; \
                 the release may be broken. Configure the path manually if you know it."
            );
        }
    }
    Ok(())
}

/// `host start`
pub fn host_start(store: &ConfigStore, path: Option<PathBuf>) -> Result<()> {
    let manager = sunshine_manager(store, path);
    let message = manager.start_service(None)?;
    println!("{}", message);
    Ok(())
}

/// `host status`
pub async fn host_status(store: &ConfigStore, watch: bool, interval: u64) -> Result<()> {
    let manager = sunshine_manager(store, None);

    loop {
        let running = manager.is_running().await;
        println!(
            "Sunshine is {}",
            if running { "running" } else { "not reachable" }
        );
        if !watch {
            return Ok(());
        }
        tokio::time::sleep(Duration::from_secs(interval.max(1))).await;
    }
}

/// `host send-pin`
pub async fn host_send_pin(
    store: &ConfigStore,
    pin: String,
    user: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let username = user.or_else(|| store.get(KEY_SUNSHINE_USER).map(String::from));
    let password = password.or_else(|| store.get(KEY_SUNSHINE_PASS).map(String::from));

    if username.is_none() || password.is_none() {
        return Err(LauncherError::config(
            "Sunshine credentials are not set; run `gamebeam host set-creds` first",
        ));
    }

    let api = HostApi::new(username, password)?;
    let message = api.send_pin(&pin).await?;
    println!("{}", message);
    Ok(())
}

/// `host set-creds`
pub async fn host_set_creds(
    store: &mut ConfigStore,
    username: String,
    password: String,
) -> Result<()> {
    let manager = sunshine_manager(store, None);
    let message = manager.initialize_credentials(&username, &password).await?;

    // Persist only after Sunshine accepted the pair
    store.set(KEY_SUNSHINE_USER, username)?;
    store.set(KEY_SUNSHINE_PASS, password)?;
    println!("{}", message);
    Ok(())
}

/// `host web-ui`
pub fn host_web_ui() {
    println!("{}", WEB_UI_URL);
}

/// `client launch`
pub fn client_launch(
    store: &ConfigStore,
    target: String,
    resolution: String,
    fps: u32,
    bitrate: u32,
    no_vsync: bool,
    app: String,
    path: Option<PathBuf>,
) -> Result<()> {
    // A connection code decodes to the host address; anything else is taken
    // as a literal IP or hostname.
    let host = match decode_connection_code(&target) {
        Some(ip) => {
            info!("Decoded connection code to {}", ip);
            ip
        }
        None => target,
    };

    let (width, height) = parse_resolution(&resolution)?;
    let mut settings = StreamSettings::new(host);
    settings.app_name = app;
    settings.width = width;
    settings.height = height;
    settings.fps = fps;
    settings.bitrate_kbps = bitrate;
    settings.vsync = !no_vsync;

    let runner = moonlight_runner(store, path);
    let message = runner.launch(&settings)?;
    println!("{}", message);
    Ok(())
}

/// `client gui`
pub fn client_gui(store: &ConfigStore, path: Option<PathBuf>) -> Result<()> {
    let runner = moonlight_runner(store, path);
    let message = runner.open_gui()?;
    println!("{}", message);
    Ok(())
}

/// `code encode`
pub fn code_encode(ip: String) {
    println!("{}", encode_connection_code(&ip));
}

/// `code decode`
pub fn code_decode(code: String) -> Result<()> {
    match decode_connection_code(&code) {
        Some(ip) => {
            println!("{}", ip);
            Ok(())
        }
        None => Err(LauncherError::other("not a recognized connection code")),
    }
}

/// `ip`
pub fn show_ip() {
    let ip = local_ip();
    println!("Local IP:        {}", ip);
    println!("Connection code: {}", encode_connection_code(&ip));
}

/// `config get`
pub fn config_get(store: &ConfigStore, key: String) -> Result<()> {
    match store.get(&key) {
        Some(value) => {
            println!("{}", value);
            Ok(())
        }
        None => Err(LauncherError::config(format!("no such key: {}", key))),
    }
}

/// `config set`
pub fn config_set(store: &mut ConfigStore, key: String, value: String) -> Result<()> {
    store.set(key, value)?;
    Ok(())
}

/// `config list`
pub fn config_list(store: &ConfigStore) {
    for (key, value) in store.entries() {
        // Credentials stay out of terminal scrollback
        if key == KEY_SUNSHINE_PASS {
            println!("{}=********", key);
        } else {
            println!("{}={}", key, value);
        }
    }
}

/// `config path`
pub fn config_path(store: &ConfigStore) {
    println!("{}", store.path().display());
}

/// Parse a `WIDTHxHEIGHT` resolution string
fn parse_resolution(resolution: &str) -> Result<(u32, u32)> {
    let lowered = resolution.to_lowercase();
    let parse = || -> Option<(u32, u32)> {
        let (w, h) = lowered.split_once('x')?;
        Some((w.trim().parse().ok()?, h.trim().parse().ok()?))
    };
    parse().ok_or_else(|| {
        LauncherError::config(format!(
            "invalid resolution {:?}, expected WIDTHxHEIGHT",
            resolution
        ))
    })
}
