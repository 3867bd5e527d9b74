// file: src/logging/mod.rs
// version: 1.0.0
// guid: b6e24f80-9d1c-47a3-8e52-0c4b7a91d3f5

//! Logging infrastructure

pub mod logger;
