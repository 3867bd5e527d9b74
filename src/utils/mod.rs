// file: src/utils/mod.rs
// version: 1.0.0
// guid: 29c6e1b4-8a0d-4f53-97e2-6d3b10c8f4a7

//! Small shared utilities

pub mod code;
pub mod netinfo;
