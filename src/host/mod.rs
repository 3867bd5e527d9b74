// file: src/host/mod.rs
// version: 1.1.0
// guid: e59c07b3-48d2-4fa6-9017-c2e86b4d35f0

//! Sunshine host service management

pub mod api;
mod manager;

pub use api::HostApi;
pub use manager::{probe_port, HostManager, ADMIN_PORT, WEB_UI_URL};
