// file: src/config/mod.rs
// version: 1.1.0
// guid: 7a2f50c9-e813-4d67-b094-6c1d8e35a7f2

//! Flat key/value configuration persistence

mod store;

pub use store::ConfigStore;

/// Configured path of the Sunshine executable
pub const KEY_SUNSHINE_PATH: &str = "sunshine_path";
/// Configured path of the Moonlight executable
pub const KEY_MOONLIGHT_PATH: &str = "moonlight_path";
/// Username for the Sunshine admin API
pub const KEY_SUNSHINE_USER: &str = "sunshine_user";
/// Password for the Sunshine admin API
pub const KEY_SUNSHINE_PASS: &str = "sunshine_pass";

/// Default location of the configuration file
pub fn default_config_path() -> std::path::PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("gamebeam")
        .join("gamebeam.conf")
}
