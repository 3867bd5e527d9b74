// file: src/client/mod.rs
// version: 1.0.0
// guid: 4c28b6f0-d913-4a57-8e02-7f5a1c94d6b3

//! Moonlight client management

mod runner;

pub use runner::{ClientRunner, StreamSettings};
