// Configuration loading and parsing (analyzer.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire analyzer.toml file.
#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    data_paths: DataPaths,
    #[serde(default)]
    output: OutputSection,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct OutputSection {
    /// Where to write the JSON report set. Stdout when omitted.
    path: Option<String>,
}

/// Paths to the two provider CSV exports.
#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    pub shot_locations: String,
    pub team_stats: String,
}

/// The assembled runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_paths: DataPaths,
    pub output_path: Option<String>,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })?;
    let file: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Config {
        data_paths: file.data_paths,
        output_path: file.output.path,
    })
}
