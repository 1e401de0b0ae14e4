// LogTally - app/mod.rs
//
// Application layer: run orchestration and report rendering.

pub mod pipeline;
pub mod render;
