// file: src/process/mod.rs
// version: 1.0.0
// guid: 0e8d4c72-a5f1-4b93-8620-7c3e9f15d0a8

//! External process location and spawning

mod locator;
mod spawn;

pub use locator::{moonlight_well_known, sunshine_well_known, ExecutableLocator};
pub use spawn::spawn_detached;
