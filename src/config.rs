use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub vision: VisionSettings,
    pub matching: MatchingSettings,
    pub scoring: ScoringSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VisionSettings {
    pub endpoint: String,
    pub api_key: String,
    pub timeout_secs: Option<u64>,
    pub max_labels: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    pub fallback_count: Option<usize>,
    pub default_required_hours: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub adjustments: AdjustmentsConfig,
}

/// Quality-adjustment constants, overridable from config
#[derive(Debug, Clone, Deserialize)]
pub struct AdjustmentsConfig {
    #[serde(default = "default_severe_damage")]
    pub severe_damage: i32,
    #[serde(default = "default_moderate_damage")]
    pub moderate_damage: i32,
    #[serde(default = "default_mild_damage")]
    pub mild_damage: i32,
    #[serde(default = "default_shine_high")]
    pub shine_high: i32,
    #[serde(default = "default_shine_low")]
    pub shine_low: i32,
    #[serde(default = "default_frizz_high")]
    pub frizz_high: i32,
    #[serde(default = "default_frizz_low")]
    pub frizz_low: i32,
    #[serde(default = "default_bleached")]
    pub bleached: i32,
}

impl Default for AdjustmentsConfig {
    fn default() -> Self {
        Self {
            severe_damage: default_severe_damage(),
            moderate_damage: default_moderate_damage(),
            mild_damage: default_mild_damage(),
            shine_high: default_shine_high(),
            shine_low: default_shine_low(),
            frizz_high: default_frizz_high(),
            frizz_low: default_frizz_low(),
            bleached: default_bleached(),
        }
    }
}

fn default_severe_damage() -> i32 { -20 }
fn default_moderate_damage() -> i32 { -10 }
fn default_mild_damage() -> i32 { -5 }
fn default_shine_high() -> i32 { 10 }
fn default_shine_low() -> i32 { -10 }
fn default_frizz_high() -> i32 { -10 }
fn default_frizz_low() -> i32 { 5 }
fn default_bleached() -> i32 { -5 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with NYWELE_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with NYWELE_)
            // e.g., NYWELE_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("NYWELE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("NYWELE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Pull the vision credentials from the conventional environment variables
/// when present: VISION_API_KEY is checked first, then NYWELE_VISION__API_KEY.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let api_key = env::var("VISION_API_KEY")
        .or_else(|_| env::var("NYWELE_VISION__API_KEY"))
        .ok();
    let endpoint = env::var("NYWELE_VISION__ENDPOINT").ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(api_key) = api_key {
        builder = builder.set_override("vision.api_key", api_key)?;
    }
    if let Some(endpoint) = endpoint {
        builder = builder.set_override("vision.endpoint", endpoint)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_adjustments() {
        let adjustments = AdjustmentsConfig::default();
        assert_eq!(adjustments.severe_damage, -20);
        assert_eq!(adjustments.moderate_damage, -10);
        assert_eq!(adjustments.mild_damage, -5);
        assert_eq!(adjustments.shine_high, 10);
        assert_eq!(adjustments.frizz_low, 5);
        assert_eq!(adjustments.bleached, -5);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }
}
