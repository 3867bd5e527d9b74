// file: src/cli/mod.rs
// version: 1.0.0
// guid: 67f019c4-2db8-4a65-93e7-08b5d4c1f6a2

//! Command line interface

pub mod args;
pub mod commands;
