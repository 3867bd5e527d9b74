// file: src/installer/mod.rs
// version: 1.2.0
// guid: a1e57d93-0c48-4b26-bf70-3d89e2c65a14

//! Portable release installation for the two external tools

mod install;
pub mod release;
pub mod task;

pub use install::{Progress, ReleaseInstaller};
pub use task::{spawn_install, InstallEvent};

/// Where and how to fetch a tool's portable release
#[derive(Debug, Clone, Copy)]
pub struct ToolRelease {
    /// Display name
    pub name: &'static str,
    /// Latest-release metadata endpoint
    pub releases_url: &'static str,
    /// Platform substring the preferred asset name must contain
    pub platform_tag: &'static str,
    /// File name for the temporary downloaded archive
    pub archive_name: &'static str,
    /// Executable to look for after extraction
    pub executable: &'static str,
}

/// Sunshine host service release source
pub const SUNSHINE: ToolRelease = ToolRelease {
    name: "Sunshine",
    releases_url: "https://api.github.com/repos/LizardByte/Sunshine/releases/latest",
    platform_tag: "windows",
    archive_name: "sunshine.zip",
    executable: "sunshine.exe",
};

/// Moonlight client release source
pub const MOONLIGHT: ToolRelease = ToolRelease {
    name: "Moonlight",
    releases_url: "https://api.github.com/repos/moonlight-stream/moonlight-qt/releases/latest",
    platform_tag: "x64",
    archive_name: "moonlight.zip",
    executable: "Moonlight.exe",
};
