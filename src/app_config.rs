use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Output subtitle format
    #[serde(default)]
    pub output_format: SubtitleFormat,

    /// Stream base timestamp (ms) cues are rebased against; none or 0 disables rebasing
    #[serde(default)]
    pub base_timestamp_ms: Option<i64>,

    /// Tag inserted before the output extension, e.g. `movie.en.srt`
    #[serde(default)]
    pub output_suffix: Option<String>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Print log lines without ANSI colors
    #[serde(default)]
    pub no_ansi_color: bool,

    /// Also write log lines to a per-run log file
    #[serde(default)]
    pub write_log_file: bool,

    /// Directory for log files; platform data directory when unset
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

/// Subtitle output format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubtitleFormat {
    // @format: SubRip
    #[default]
    Srt,
    // @format: WebVTT
    Vtt,
}

impl SubtitleFormat {
    // @returns: File extension without dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Srt => "srt",
            Self::Vtt => "vtt",
        }
    }

    // @returns: Human readable format name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Srt => "SRT",
            Self::Vtt => "WebVTT",
        }
    }
}

impl std::fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for SubtitleFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "srt" => Ok(Self::Srt),
            "vtt" | "webvtt" => Ok(Self::Vtt),
            _ => Err(anyhow!("Invalid subtitle format: {}", s)),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Config {
    /// Parse a configuration from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the configuration at `path`, writing a default one first if it is missing.
    ///
    /// Returns the configuration and whether it was freshly created.
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<(Self, bool)> {
        let path = path.as_ref();
        if path.exists() {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to open config file: {}", path.display()))?;
            let config = Self::from_json_str(&json)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            return Ok((config, false));
        }

        let config = Config::default();
        let json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write default config to file: {}", path.display()))?;
        Ok((config, true))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(suffix) = &self.output_suffix {
            if suffix.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "output_suffix",
                    message: "must not be empty when set".to_string(),
                });
            }
            if suffix.contains(['/', '\\']) {
                return Err(ConfigError::InvalidValue {
                    field: "output_suffix",
                    message: format!("must not contain path separators, got '{}'", suffix),
                });
            }
        }

        Ok(())
    }

    /// Directory log files are written to
    pub fn resolved_log_dir(&self) -> PathBuf {
        if let Some(dir) = &self.log_dir {
            return dir.clone();
        }

        dirs::data_local_dir()
            .map(|dir| dir.join("subvtt").join("Logs"))
            .unwrap_or_else(|| PathBuf::from("Logs"))
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            output_format: SubtitleFormat::default(),
            base_timestamp_ms: None,
            output_suffix: None,
            log_level: LogLevel::default(),
            no_ansi_color: false,
            write_log_file: false,
            log_dir: None,
        }
    }
}
