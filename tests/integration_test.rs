// file: tests/integration_test.rs
// version: 1.1.0
// guid: 7c50e2d9-31b6-4f84-a0c7-96e4d5b28f01

//! Integration tests for the GameBeam launcher library

use gamebeam::config::ConfigStore;
use gamebeam::host::probe_port;
use gamebeam::installer::release::{select_asset, ReleaseAsset};
use gamebeam::process::ExecutableLocator;
use gamebeam::utils::code::{decode_connection_code, encode_connection_code};
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_config_survives_full_reload_cycle() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gamebeam.conf");

    let mut store = ConfigStore::load(&path);
    store
        .set("sunshine_path", r"C:\Sunshine\sunshine.exe")
        .unwrap();
    store.set("sunshine_user", "admin").unwrap();
    store.set("sunshine_user", "admin2").unwrap();
    drop(store);

    let store = ConfigStore::load(&path);
    assert_eq!(store.get("sunshine_path"), Some(r"C:\Sunshine\sunshine.exe"));
    assert_eq!(store.get("sunshine_user"), Some("admin2"));
    assert_eq!(store.entries().len(), 2);
}

#[test]
fn test_connection_code_round_trip_for_local_style_addresses() {
    for ip in ["192.168.0.1", "10.20.30.40", "172.16.5.9", "fe80::abcd"] {
        let code = encode_connection_code(ip);
        assert_eq!(decode_connection_code(&code).as_deref(), Some(ip));
    }
}

#[test]
fn test_connection_code_garbage_never_panics() {
    for junk in ["GSP", "GSP--", "G\u{1F600}P", "====", "\0\0\0", "GSP-\n\n"] {
        let _ = decode_connection_code(junk);
    }
}

#[test]
fn test_asset_selection_tiers_end_to_end() {
    let assets: Vec<ReleaseAsset> = [
        "sunshine-windows-installer.exe",
        "sunshine-macos-portable.zip",
        "sunshine-windows-portable.zip",
    ]
    .iter()
    .map(|name| ReleaseAsset {
        name: name.to_string(),
        browser_download_url: format!("https://example.test/{}", name),
    })
    .collect();

    // Full match wins over the portable-only tier hit
    let selected = select_asset(&assets, "windows").unwrap();
    assert_eq!(selected.name, "sunshine-windows-portable.zip");

    // With the platform-tagged asset gone, the relaxed tier applies
    let selected = select_asset(&assets[..2], "windows").unwrap();
    assert_eq!(selected.name, "sunshine-macos-portable.zip");

    // No portable asset at all is a miss
    assert!(select_asset(&assets[..1], "windows").is_none());
}

#[test]
fn test_locator_priority_chain() {
    let dir = TempDir::new().unwrap();
    let make = |name: &str| {
        let path = dir.path().join(name);
        std::fs::write(&path, b"").unwrap();
        path
    };
    let well_known = make("well_known.exe");
    let custom = make("custom.exe");
    let explicit = make("explicit.exe");

    let base = ExecutableLocator::new("tool", vec![well_known.clone()]);
    assert_eq!(base.locate(), Some(well_known));

    let with_custom = base.clone().with_custom_path(Some(custom.clone()));
    assert_eq!(with_custom.locate(), Some(custom));

    let with_override = with_custom.with_override(Some(explicit.clone()));
    assert_eq!(with_override.locate(), Some(explicit));
}

#[tokio::test]
async fn test_probe_distinguishes_open_and_closed_ports() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let open_port = listener.local_addr().unwrap().port();
    assert!(probe_port("127.0.0.1", open_port, Duration::from_secs(1)).await);

    drop(listener);
    assert!(!probe_port("127.0.0.1", open_port, Duration::from_secs(1)).await);
}
