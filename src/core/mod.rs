// LogTally - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, regex, chrono, serde.
// Must NOT depend on: app, platform.

pub mod aggregate;
pub mod export;
pub mod filter;
pub mod model;
pub mod parser;
