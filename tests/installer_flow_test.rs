// file: tests/installer_flow_test.rs
// version: 1.0.0
// guid: 48b1d9e6-72c0-4f35-a8d4-01e76c3b95f2

//! Full install pipeline against a local release server

use gamebeam::installer::{spawn_install, InstallEvent, ReleaseInstaller, ToolRelease};
use std::io::Write;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve a fake release index at `/release` and the archive at `/download`.
async fn spawn_release_server(zip_bytes: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let download_base = base.clone();

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            let zip = zip_bytes.clone();
            let download_url = format!("{}/download", download_base);
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let n = stream.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]).to_string();

                let body = if request.starts_with("GET /release") {
                    serde_json::json!({
                        "tag_name": "v9.9.9",
                        "assets": [
                            {
                                "name": "tool-windows-setup.exe",
                                "browser_download_url": "http://unused.test/setup"
                            },
                            {
                                "name": "tool-windows-portable.zip",
                                "browser_download_url": download_url
                            }
                        ]
                    })
                    .to_string()
                    .into_bytes()
                } else {
                    zip
                };

                let header = format!(
                    "HTTP/1.1 200 OK\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
                    body.len()
                );
                let _ = stream.write_all(header.as_bytes()).await;
                let _ = stream.write_all(&body).await;
            });
        }
    });

    base
}

fn build_archive() -> Vec<u8> {
    let mut cursor = std::io::Cursor::new(Vec::new());
    {
        let mut writer = zip::ZipWriter::new(&mut cursor);
        let options = zip::write::SimpleFileOptions::default();
        writer.start_file("Tool/bin/tool.exe", options).unwrap();
        // Big enough to arrive in several chunks
        writer.write_all(&vec![0xABu8; 256 * 1024]).unwrap();
        writer.start_file("Tool/readme.txt", options).unwrap();
        writer.write_all(b"portable build").unwrap();
        writer.finish().unwrap();
    }
    cursor.into_inner()
}

#[tokio::test]
async fn test_install_pipeline_end_to_end() {
    let base = spawn_release_server(build_archive()).await;
    let releases_url: &'static str = Box::leak(format!("{}/release", base).into_boxed_str());

    let tool = ToolRelease {
        name: "Tool",
        releases_url,
        platform_tag: "windows",
        archive_name: "tool.zip",
        executable: "tool.exe",
    };

    let dir = TempDir::new().unwrap();
    let mut events = spawn_install(ReleaseInstaller::new(tool), dir.path().to_path_buf());

    let mut last_percent = 0u8;
    let mut terminal = None;
    while let Some(event) = events.recv().await {
        match event {
            InstallEvent::Progress { percent, .. } => {
                assert!(percent >= last_percent, "{} < {}", percent, last_percent);
                assert!(percent <= 100);
                assert!(
                    terminal.is_none(),
                    "progress delivered after the terminal event"
                );
                last_percent = percent;
            }
            InstallEvent::Finished(result) => {
                assert!(terminal.is_none(), "terminal event delivered twice");
                terminal = Some(result);
            }
        }
    }

    // Success ends at exactly 100
    assert_eq!(last_percent, 100);

    let exe_path = terminal
        .expect("no terminal event")
        .expect("install failed")
        .expect("executable missing after extraction");
    assert!(exe_path.ends_with("Tool/bin/tool.exe"));
    assert_eq!(std::fs::metadata(&exe_path).unwrap().len(), 256 * 1024);

    // Extraction happened and the temporary archive is gone
    assert!(dir.path().join("Tool/readme.txt").exists());
    assert!(!dir.path().join("tool.zip").exists());
}
