// file: src/installer/release.rs
// version: 1.1.0
// guid: c83f6b20-94d5-4ae1-8c07-5f21d9e4b376

//! Release metadata and asset selection

use serde::Deserialize;

/// One downloadable asset attached to a release
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
}

/// Latest-release metadata as returned by the release index
#[derive(Debug, Deserialize)]
pub struct ReleaseInfo {
    #[serde(default)]
    pub tag_name: String,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// Pick the download asset for a portable zip release.
///
/// Matching is case-insensitive on the asset file name and runs in ordered
/// tiers: first an asset carrying both the platform tag and "portable", then
/// any "portable" asset. Every tier requires the `.zip` suffix. Release
/// naming schemes drift between versions, hence the relaxation step.
pub fn select_asset<'a>(assets: &'a [ReleaseAsset], platform_tag: &str) -> Option<&'a ReleaseAsset> {
    let tag = platform_tag.to_lowercase();
    let tiers: [&[&str]; 2] = [&[tag.as_str(), "portable"], &["portable"]];

    for tier in tiers {
        let found = assets.iter().find(|asset| {
            let name = asset.name.to_lowercase();
            name.ends_with(".zip") && tier.iter().all(|needle| name.contains(needle))
        });
        if found.is_some() {
            return found;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(name: &str) -> ReleaseAsset {
        ReleaseAsset {
            name: name.to_string(),
            browser_download_url: format!("https://example.test/{}", name),
        }
    }

    #[test]
    fn test_prefers_platform_tagged_portable() {
        let assets = vec![
            asset("tool-portable.zip"),
            asset("tool-windows-portable.zip"),
            asset("tool-windows-installer.exe"),
        ];
        let selected = select_asset(&assets, "windows").unwrap();
        assert_eq!(selected.name, "tool-windows-portable.zip");
    }

    #[test]
    fn test_relaxes_to_portable_only() {
        let assets = vec![
            asset("tool-linux.tar.gz"),
            asset("tool-Portable.zip"),
        ];
        let selected = select_asset(&assets, "windows").unwrap();
        assert_eq!(selected.name, "tool-Portable.zip");
    }

    #[test]
    fn test_no_portable_asset_is_no_match() {
        let assets = vec![
            asset("tool-windows-setup.exe"),
            asset("tool-windows.zip"),
            asset("sources.tar.gz"),
        ];
        assert!(select_asset(&assets, "windows").is_none());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let assets = vec![asset("Tool-WINDOWS-PORTABLE.ZIP")];
        let selected = select_asset(&assets, "Windows").unwrap();
        assert_eq!(selected.name, "Tool-WINDOWS-PORTABLE.ZIP");
    }

    #[test]
    fn test_extension_is_required() {
        let assets = vec![asset("tool-windows-portable.7z")];
        assert!(select_asset(&assets, "windows").is_none());
    }

    #[test]
    fn test_empty_asset_list() {
        assert!(select_asset(&[], "windows").is_none());
    }
}
