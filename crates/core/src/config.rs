//! Configuration for the GVM engine.
//!
//! This module defines the configuration structures used to parameterize a
//! machine. It provides:
//! 1. **Defaults:** Baseline values applied to every field not supplied.
//! 2. **Structures:** General engine options and output channel options.
//! 3. **Loading:** JSON deserialization from a string or a file.
//!
//! Use `Config::default()` for the stock behaviour, or deserialize a partial
//! JSON document; missing sections and fields fall back to the defaults.

use std::path::Path;

use serde::Deserialize;

use crate::common::GvmError;

/// Default configuration constants.
mod defaults {
    /// Per-instruction trace events are off unless requested.
    pub const TRACE_INSTRUCTIONS: bool = false;

    /// Execution statistics are collected by default; the counters are cheap.
    pub const COLLECT_STATS: bool = true;

    /// `OUTPUT` values go to stdout.
    pub const OUTPUT_TO_STDERR: bool = false;
}

/// Root configuration type.
///
/// # Examples
///
/// ```
/// use gvm_core::config::Config;
///
/// let json = r#"{ "general": { "trace_instructions": true } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert!(config.general.collect_stats);
/// assert!(!config.output.to_stderr);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General engine settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Output channel settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the document is malformed or a field
    /// has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`GvmError::Io`] if the file cannot be read, [`GvmError::Json`] if it
    /// does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GvmError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| GvmError::io(path, e))?;
        Self::from_json(&text).map_err(|source| GvmError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// General engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `trace`-level event for every evaluated instruction
    #[serde(default = "GeneralConfig::default_trace_instructions")]
    pub trace_instructions: bool,

    /// Maintain execution statistics during `run`/`step`
    #[serde(default = "GeneralConfig::default_collect_stats")]
    pub collect_stats: bool,
}

impl GeneralConfig {
    /// Returns the default instruction tracing flag.
    const fn default_trace_instructions() -> bool {
        defaults::TRACE_INSTRUCTIONS
    }

    /// Returns the default statistics flag.
    const fn default_collect_stats() -> bool {
        defaults::COLLECT_STATS
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: defaults::TRACE_INSTRUCTIONS,
            collect_stats: defaults::COLLECT_STATS,
        }
    }
}

/// Output channel settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// When true, the console sink writes `OUTPUT` values to stderr.
    #[serde(default = "OutputConfig::default_to_stderr")]
    pub to_stderr: bool,
}

impl OutputConfig {
    /// Returns the default stderr routing flag.
    const fn default_to_stderr() -> bool {
        defaults::OUTPUT_TO_STDERR
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            to_stderr: defaults::OUTPUT_TO_STDERR,
        }
    }
}
