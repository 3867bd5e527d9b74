// file: src/process/locator.rs
// version: 1.1.0
// guid: 74b2f9c6-1d80-4e35-ac47-92d5e8b06f13

//! Executable resolution across configured and well-known paths

use std::path::PathBuf;
use tracing::{debug, warn};

/// Resolves a tool's executable by fixed priority: an explicit override,
/// then the user-configured path, then an ordered list of well-known
/// install locations. First existing path wins.
#[derive(Debug, Clone)]
pub struct ExecutableLocator {
    tool_name: &'static str,
    override_path: Option<PathBuf>,
    custom_path: Option<PathBuf>,
    well_known: Vec<PathBuf>,
}

impl ExecutableLocator {
    /// Create a locator with its well-known fallback locations
    pub fn new(tool_name: &'static str, well_known: Vec<PathBuf>) -> Self {
        Self {
            tool_name,
            override_path: None,
            custom_path: None,
            well_known,
        }
    }

    /// Set an explicit override, beating every other source
    pub fn with_override(mut self, path: Option<PathBuf>) -> Self {
        self.override_path = path;
        self
    }

    /// Set the user-configured path. A path that does not exist is kept but
    /// will simply never resolve, so stale config entries degrade gracefully.
    pub fn with_custom_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = &path {
            if !path.exists() {
                warn!(
                    "Configured {} path does not exist: {}",
                    self.tool_name,
                    path.display()
                );
            }
        }
        self.custom_path = path;
        self
    }

    /// Resolve the executable, or `None` if nothing on the search list exists.
    pub fn locate(&self) -> Option<PathBuf> {
        let candidates = self
            .override_path
            .iter()
            .chain(self.custom_path.iter())
            .chain(self.well_known.iter());

        for candidate in candidates {
            if candidate.is_file() {
                debug!("Found {} at {}", self.tool_name, candidate.display());
                return Some(candidate.clone());
            }
        }

        debug!("{} not found in any known location", self.tool_name);
        None
    }

    /// Tool name this locator searches for
    pub fn tool_name(&self) -> &'static str {
        self.tool_name
    }
}

/// Well-known Sunshine install locations, most specific first
pub fn sunshine_well_known() -> Vec<PathBuf> {
    [
        r"C:\Program Files\Sunshine\sunshine.exe",
        r"C:\Program Files (x86)\Sunshine\sunshine.exe",
        r"C:\Sunshine\sunshine.exe",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

/// Well-known Moonlight install locations
pub fn moonlight_well_known() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = [
        r"C:\Program Files\Moonlight Game Streaming\Moonlight.exe",
        r"C:\Program Files (x86)\Moonlight Game Streaming\Moonlight.exe",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect();

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(r"AppData\Local\Moonlight Game Streaming\Moonlight.exe"));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, b"").unwrap();
        path
    }

    #[test]
    fn test_override_beats_everything() {
        let dir = TempDir::new().unwrap();
        let override_exe = touch(&dir, "override.exe");
        let custom_exe = touch(&dir, "custom.exe");
        let known_exe = touch(&dir, "known.exe");

        let locator = ExecutableLocator::new("tool", vec![known_exe])
            .with_custom_path(Some(custom_exe))
            .with_override(Some(override_exe.clone()));

        assert_eq!(locator.locate(), Some(override_exe));
    }

    #[test]
    fn test_custom_beats_well_known() {
        let dir = TempDir::new().unwrap();
        let custom_exe = touch(&dir, "custom.exe");
        let known_exe = touch(&dir, "known.exe");

        let locator =
            ExecutableLocator::new("tool", vec![known_exe]).with_custom_path(Some(custom_exe.clone()));

        assert_eq!(locator.locate(), Some(custom_exe));
    }

    #[test]
    fn test_well_known_order_is_respected() {
        let dir = TempDir::new().unwrap();
        let first = touch(&dir, "first.exe");
        let second = touch(&dir, "second.exe");

        let locator = ExecutableLocator::new("tool", vec![first.clone(), second]);
        assert_eq!(locator.locate(), Some(first));
    }

    #[test]
    fn test_missing_paths_fall_through() {
        let dir = TempDir::new().unwrap();
        let known_exe = touch(&dir, "known.exe");

        let locator = ExecutableLocator::new("tool", vec![known_exe.clone()])
            .with_override(Some(dir.path().join("gone.exe")))
            .with_custom_path(Some(dir.path().join("also-gone.exe")));

        assert_eq!(locator.locate(), Some(known_exe));
    }

    #[test]
    fn test_nothing_found() {
        let dir = TempDir::new().unwrap();
        let locator = ExecutableLocator::new("tool", vec![dir.path().join("absent.exe")]);
        assert_eq!(locator.locate(), None);
    }
}
