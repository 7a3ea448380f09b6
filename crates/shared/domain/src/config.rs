use crate::query::Collation;
use serde::Deserialize;
use strum_macros::{Display, EnumString};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Default host for flag images.
pub const DEFAULT_CDN_BASE_URL: &str = "https://flagcdn.com";

/// Top-level runtime configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeodexConfigInner {
    pub query: QueryConfig,
    pub flags: FlagsConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct GeodexConfig {
    #[serde(flatten, default)]
    inner: Arc<GeodexConfigInner>,
}

impl Deref for GeodexConfig {
    type Target = GeodexConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for GeodexConfig {
    fn deref_mut(&mut self) -> &mut GeodexConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Query engine settings.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub collation: Collation,
}

/// Flag URL settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FlagsConfig {
    pub cdn_base_url: String,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Extra filter directives, e.g. `geodex_query=trace`.
    pub env_filter: Option<String>,
    /// Directory for rolling log files. Console only when absent.
    pub path: Option<PathBuf>,
    pub json: bool,
    /// How often a new log file is started.
    pub rotation: LogRotation,
    /// Number of rotated files kept in `path`.
    pub max_files: usize,
}

/// Log file rotation period.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogRotation {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

// --- Default ---

impl Default for FlagsConfig {
    fn default() -> Self {
        Self { cdn_base_url: DEFAULT_CDN_BASE_URL.to_owned() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            env_filter: None,
            path: None,
            json: false,
            rotation: LogRotation::Daily,
            max_files: 10,
        }
    }
}
