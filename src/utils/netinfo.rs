// file: src/utils/netinfo.rs
// version: 1.1.0
// guid: 5b90d3f8-26ac-4e71-b845-9f02c6d1e83a

//! Local network address discovery

use std::net::{ToSocketAddrs, UdpSocket};
use std::process::Command;
use tracing::debug;

/// Best-effort local IP discovery.
///
/// Tries each strategy in order and returns the first hit; falls back to
/// loopback when nothing better can be determined. Never fails.
pub fn local_ip() -> String {
    let strategies: [(&str, fn() -> Option<String>); 2] = [
        ("default-route", via_default_route),
        ("hostname", via_hostname_lookup),
    ];

    for (name, strategy) in strategies {
        if let Some(ip) = strategy() {
            debug!("Local IP {} via {} strategy", ip, name);
            return ip;
        }
    }

    "127.0.0.1".to_string()
}

/// Ask the OS which source address it would route to a public host.
/// Connecting a UDP socket sends no packets; it only fixes the route.
fn via_default_route() -> Option<String> {
    let socket = UdpSocket::bind(("0.0.0.0", 0)).ok()?;
    socket.connect(("8.8.8.8", 80)).ok()?;
    let ip = socket.local_addr().ok()?.ip();
    if ip.is_loopback() {
        return None;
    }
    Some(ip.to_string())
}

/// Resolve our own hostname and pick a private-range IPv4 address.
fn via_hostname_lookup() -> Option<String> {
    let name = local_hostname()?;
    let addrs = (name.as_str(), 0u16).to_socket_addrs().ok()?;
    addrs
        .map(|addr| addr.ip().to_string())
        .find(|ip| ip.starts_with("192.168.") || ip.starts_with("10."))
}

fn local_hostname() -> Option<String> {
    if let Ok(output) = Command::new("hostname").output() {
        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !name.is_empty() {
            return Some(name);
        }
    }

    // COMPUTERNAME on Windows, HOSTNAME on most unix shells
    std::env::var("COMPUTERNAME")
        .or_else(|_| std::env::var("HOSTNAME"))
        .ok()
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_local_ip_is_parseable_ipv4() {
        let ip = local_ip();
        assert!(ip.parse::<Ipv4Addr>().is_ok(), "not an IPv4 literal: {}", ip);
    }

    #[test]
    fn test_local_ip_never_empty() {
        assert!(!local_ip().is_empty());
    }
}
