// file: src/installer/install.rs
// version: 1.2.1
// guid: 6d2b94f7-3a81-4c50-9e16-b87c05d3f2e9

//! Download and extraction of a tool's portable release
//!
//! An install run is: query the release index, resolve the portable zip
//! asset, stream it into the target directory, extract, then locate the
//! tool's executable in the extracted tree. Progress lands on the supplied
//! callback as (status text, percent) pairs, non-decreasing and ending at
//! 100 only when the whole run succeeded.

use crate::installer::release::{select_asset, ReleaseInfo};
use crate::installer::ToolRelease;
use crate::{LauncherError, Result};
use futures::StreamExt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Progress callback: (status text, percent complete)
pub type Progress<'a> = &'a (dyn Fn(&str, u8) + Send + Sync);

/// Installer for one tool's portable release
pub struct ReleaseInstaller {
    tool: ToolRelease,
    client: reqwest::Client,
}

impl ReleaseInstaller {
    /// Create an installer for the given tool
    pub fn new(tool: ToolRelease) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("gamebeam/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self { tool, client }
    }

    /// The tool this installer fetches
    pub fn tool(&self) -> &ToolRelease {
        &self.tool
    }

    /// Run a full install into `target_dir`.
    ///
    /// Returns the path of the extracted executable, or `Ok(None)` when the
    /// archive extracted cleanly but the expected executable was not inside
    /// it. The latter is a caller-visible condition, not a hard failure.
    pub async fn install(&self, target_dir: &Path, progress: Progress<'_>) -> Result<Option<PathBuf>> {
        let result = self.install_inner(target_dir, progress).await;
        if let Err(e) = &result {
            warn!("{} install failed: {}", self.tool.name, e);
        }
        result
    }

    async fn install_inner(&self, target_dir: &Path, progress: Progress<'_>) -> Result<Option<PathBuf>> {
        progress("Checking latest release...", 10);

        let release = self.fetch_latest_release().await?;
        let asset = select_asset(&release.assets, self.tool.platform_tag).ok_or_else(|| {
            LauncherError::asset_not_found(format!(
                "no portable zip among {} assets of {} {}",
                release.assets.len(),
                self.tool.name,
                release.tag_name
            ))
        })?;
        info!("{} {}: downloading {}", self.tool.name, release.tag_name, asset.name);

        tokio::fs::create_dir_all(target_dir).await?;
        let archive_path = target_dir.join(self.tool.archive_name);

        progress("Downloading...", 30);
        self.download_archive(&asset.browser_download_url, &archive_path, progress)
            .await?;

        progress("Extracting...", 80);
        extract_archive(&archive_path, target_dir)?;

        // Best effort; a stale archive next to the install is harmless
        let _ = std::fs::remove_file(&archive_path);

        let executable = find_executable(target_dir, self.tool.executable);
        match &executable {
            Some(path) => info!("{} installed at {}", self.tool.name, path.display()),
            None => warn!(
                "{} archive extracted but {} was not inside it",
                self.tool.name, self.tool.executable
            ),
        }

        progress("Done!", 100);
        Ok(executable)
    }

    async fn fetch_latest_release(&self) -> Result<ReleaseInfo> {
        let response = self
            .client
            .get(self.tool.releases_url)
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| LauncherError::network(format!("release index unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(LauncherError::network(format!(
                "release index returned {}",
                response.status()
            )));
        }

        Ok(response.json::<ReleaseInfo>().await?)
    }

    /// Stream the asset to disk, mapping download progress into 30..=70.
    async fn download_archive(&self, url: &str, dest: &Path, progress: Progress<'_>) -> Result<()> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(LauncherError::network(format!(
                "download failed with status {}",
                response.status()
            )));
        }

        let total = response.content_length().filter(|len| *len > 0);
        let mut file = tokio::fs::File::create(dest).await?;
        let mut stream = response.bytes_stream();
        let mut downloaded = 0u64;
        let mut last_percent = 30u8;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            downloaded += chunk.len() as u64;

            // No content-length means no per-chunk progress for this phase
            if let Some(total) = total {
                let percent = download_percent(downloaded, total);
                if percent > last_percent {
                    last_percent = percent;
                    progress("Downloading...", percent);
                }
            }
        }

        file.flush().await?;
        debug!("Downloaded {} bytes to {}", downloaded, dest.display());
        Ok(())
    }
}

/// Map bytes-received over declared total into the 30..=70 progress window.
fn download_percent(downloaded: u64, total: u64) -> u8 {
    let ratio = (downloaded as f64 / total as f64).clamp(0.0, 1.0);
    30 + (ratio * 40.0) as u8
}

/// Extract the whole archive into `target_dir`, skipping entries whose
/// paths would escape it.
fn extract_archive(archive_path: &Path, target_dir: &Path) -> Result<()> {
    let file = std::fs::File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let Some(relative) = entry.enclosed_name() else {
            warn!("Skipping archive entry with unsafe path: {}", entry.name());
            continue;
        };
        let out_path = target_dir.join(relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&out_path)?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut out_file = std::fs::File::create(&out_path)?;
        std::io::copy(&mut entry, &mut out_file)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                let _ = std::fs::set_permissions(&out_path, std::fs::Permissions::from_mode(mode));
            }
        }
    }

    Ok(())
}

/// Find `executable` anywhere under `root`.
///
/// Release archives nest their payload inconsistently, sometimes with
/// duplicate builds, so the match is deterministic: the candidate with the
/// fewest path components wins, path order breaking ties.
fn find_executable(root: &Path, executable: &str) -> Option<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| name.eq_ignore_ascii_case(executable))
        })
        .map(|entry| (entry.depth(), entry.into_path()))
        .min_by(|a, b| a.cmp(b))
        .map(|(_, path)| path)
}
