// LogTally - platform/mod.rs
//
// Platform abstraction layer: filesystem reads and config directories.
// Must NOT depend on: app.

pub mod config;
pub mod fs;
