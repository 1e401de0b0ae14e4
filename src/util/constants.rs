// LogTally - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogTally";

/// Application identifier used for config directories.
pub const APP_ID: &str = "LogTally";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Severity levels
// =============================================================================

/// Severity labels counted by the aggregator, in report order.
///
/// Matching against these is case-sensitive; anything else is left out of
/// the count table (but still filterable).
pub const KNOWN_LEVELS: [&str; 4] = ["INFO", "ERROR", "DEBUG", "WARNING"];

/// Width of the level column in the count table.
pub const LEVEL_COLUMN_WIDTH: usize = 9;

// =============================================================================
// Input limits
// =============================================================================

/// Largest log file the loader will read into memory.
pub const MAX_INPUT_FILE_SIZE: u64 = 1024 * 1024 * 1024; // 1 GiB

/// Maximum characters of a skipped line echoed into trace output.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Export limits
// =============================================================================

/// Hard upper bound on records written by a single export.
pub const MAX_EXPORT_RECORDS: usize = 5_000_000;

/// Default export cap when config.toml does not set one.
pub const DEFAULT_EXPORT_MAX_RECORDS: usize = 1_000_000;

// =============================================================================
// Logging / config
// =============================================================================

/// Default tracing filter. Kept quiet so stdout/stderr stay readable for a
/// one-shot report; `--debug` or RUST_LOG turn it up.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
