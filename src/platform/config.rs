// LogTally - platform/config.rs
//
// Config directory resolution and config.toml loading with startup
// validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::export::ExportFormat;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for LogTally configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// config.toml inside the platform config directory
    /// (e.g. ~/.config/logtally/ or %APPDATA%\LogTally\config\).
    pub config_file: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined.
    pub fn resolve() -> Self {
        let config_dir = match ProjectDirs::from("", "", constants::APP_ID) {
            Some(proj_dirs) => proj_dirs.config_dir().to_path_buf(),
            None => {
                tracing::warn!("Could not determine platform directories, using current directory");
                PathBuf::from(".")
            }
        };
        let config_file = config_dir.join(constants::CONFIG_FILE_NAME);

        tracing::debug!(config = %config_file.display(), "Platform paths resolved");

        Self { config_file }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
    /// `[export]` section.
    pub export: ExportSection,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// `[export]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ExportSection {
    /// Default export format when `--format` is not given.
    pub format: Option<String>,
    /// Refuse exports larger than this.
    pub max_records: Option<usize>,
}

/// Validated application configuration derived from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Export format used when `--format` is absent.
    pub export_format: ExportFormat,
    /// Export record cap.
    pub export_max_records: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            export_format: ExportFormat::default(),
            export_max_records: constants::DEFAULT_EXPORT_MAX_RECORDS,
        }
    }
}

/// Load a config file the user named explicitly (`--config`).
///
/// Unlike `load_config`, a missing or unreadable file is fatal. Parse and
/// validation problems stay non-fatal.
pub fn load_explicit_config(
    config_path: &Path,
) -> Result<(AppConfig, Vec<ConfigError>), ConfigError> {
    std::fs::metadata(config_path).map_err(|e| ConfigError::Io {
        path: config_path.to_path_buf(),
        source: e,
    })?;
    Ok(load_config(config_path))
}

/// Load and validate a config file.
///
/// Returns the validated config plus a list of non-fatal problems. A
/// missing file yields defaults and no problems (first run). An unreadable
/// or unparseable file yields defaults and one problem. Each out-of-range
/// value falls back to its default and adds one problem.
///
/// Called before logging is initialised; the caller reports the problems.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<ConfigError>) {
    let mut problems: Vec<ConfigError> = Vec::new();

    if !config_path.exists() {
        return (AppConfig::default(), problems);
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            problems.push(ConfigError::Io {
                path: config_path.to_path_buf(),
                source: e,
            });
            return (AppConfig::default(), problems);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            problems.push(ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source: e,
            });
            return (AppConfig::default(), problems);
        }
    };

    let mut config = AppConfig::default();

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            problems.push(ConfigError::ValueOutOfRange {
                field: "[logging] level".to_string(),
                value: level.clone(),
                expected: "error, warn, info, debug, trace".to_string(),
            });
        }
    }

    // -- Export: format --
    if let Some(ref format) = raw.export.format {
        match format.parse::<ExportFormat>() {
            Ok(f) => config.export_format = f,
            Err(_) => problems.push(ConfigError::ValueOutOfRange {
                field: "[export] format".to_string(),
                value: format.clone(),
                expected: "csv or json".to_string(),
            }),
        }
    }

    // -- Export: max_records --
    if let Some(max) = raw.export.max_records {
        if (1..=constants::MAX_EXPORT_RECORDS).contains(&max) {
            config.export_max_records = max;
        } else {
            problems.push(ConfigError::ValueOutOfRange {
                field: "[export] max_records".to_string(),
                value: max.to_string(),
                expected: format!("1-{}", constants::MAX_EXPORT_RECORDS),
            });
        }
    }

    (config, problems)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(constants::CONFIG_FILE_NAME);
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, problems) = load_config(&dir.path().join("absent.toml"));
        assert_eq!(config, AppConfig::default());
        assert!(problems.is_empty());
    }

    #[test]
    fn test_explicit_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_explicit_config(&dir.path().join("typo.toml"));
        match result {
            Err(ConfigError::Io { source, .. }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("expected Io(NotFound), got {other:?}"),
        }
    }

    #[test]
    fn test_explicit_existing_file_loads() {
        let (_dir, path) = write_config("[export]\nformat = \"json\"\n");
        let (config, problems) = load_explicit_config(&path).unwrap();
        assert!(problems.is_empty());
        assert_eq!(config.export_format, ExportFormat::Json);
    }

    #[test]
    fn test_valid_config() {
        let (_dir, path) = write_config(
            "[logging]\nlevel = \"DEBUG\"\n\n[export]\nformat = \"json\"\nmax_records = 50\n",
        );
        let (config, problems) = load_config(&path);
        assert!(problems.is_empty(), "unexpected problems: {problems:?}");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.export_format, ExportFormat::Json);
        assert_eq!(config.export_max_records, 50);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let (_dir, path) = write_config(
            "[logging]\nlevel = \"loud\"\n\n[export]\nformat = \"xml\"\nmax_records = 0\n",
        );
        let (config, problems) = load_config(&path);
        assert_eq!(config, AppConfig::default());
        assert_eq!(problems.len(), 3);
        assert!(problems
            .iter()
            .all(|p| matches!(p, ConfigError::ValueOutOfRange { .. })));
    }

    #[test]
    fn test_unparseable_file() {
        let (_dir, path) = write_config("[logging\nlevel = ");
        let (config, problems) = load_config(&path);
        assert_eq!(config, AppConfig::default());
        assert!(matches!(problems.as_slice(), [ConfigError::TomlParse { .. }]));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let (_dir, path) = write_config("[ui]\ntheme = \"dark\"\n");
        let (config, problems) = load_config(&path);
        assert_eq!(config, AppConfig::default());
        assert!(problems.is_empty());
    }
}
