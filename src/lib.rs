// file: src/lib.rs
// version: 1.2.0
// guid: 3c7a91e5-42d8-4f06-b1ca-5e98d0a27f63

//! # GameBeam
//!
//! Launcher and pairing agent for a Sunshine streaming host and a Moonlight
//! client on the same network. The heavy lifting (capture, encode, transport,
//! decode) is done entirely by the two external programs; this crate only
//! installs them from their release archives, launches them with the right
//! arguments, and drives the one-time pairing flow.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod host;
pub mod installer;
pub mod logging;
pub mod process;
pub mod utils;

pub use error::{LauncherError, Result};

/// Version information for the launcher
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
