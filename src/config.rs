use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub translator: TranslatorSettings,
    pub overpass: OverpassSettings,
    pub listings: ListingsSettings,
    #[serde(default)]
    pub filter: FilterSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslatorSettings {
    pub endpoint: String,
    pub model: String,
    #[serde(default)]
    pub api_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverpassSettings {
    pub endpoint: String,
    #[serde(default = "default_overpass_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_radius_m")]
    pub default_radius_m: u32,
}

fn default_overpass_timeout() -> u64 {
    30
}
fn default_radius_m() -> u32 {
    1000
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingsSettings {
    pub data_file: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilterSettings {
    #[serde(default = "default_result_cap")]
    pub result_cap: usize,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            result_cap: default_result_cap(),
        }
    }
}

fn default_result_cap() -> usize {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with HAUS__)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with HAUS__)
            // e.g., HAUS__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("HAUS")
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
                Environment::with_prefix("HAUS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply well-known environment overrides
///
/// The translator token is usually provisioned as HF_TOKEN in deployment
/// environments; HAUS_TRANSLATOR__API_TOKEN also works via the generic
/// prefix source above.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let api_token = env::var("HF_TOKEN")
        .or_else(|_| env::var("HAUS_TRANSLATOR__API_TOKEN"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(token) = api_token {
        builder = builder.set_override("translator.api_token", token)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_settings() {
        let filter = FilterSettings::default();
        assert_eq!(filter.result_cap, 10);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_default_overpass_values() {
        assert_eq!(default_overpass_timeout(), 30);
        assert_eq!(default_radius_m(), 1000);
    }

    #[test]
    fn test_load_from_custom_path() {
        let mut path = std::env::temp_dir();
        path.push(format!("haus-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            r#"
[server]
host = "127.0.0.1"
port = 9090

[translator]
endpoint = "http://localhost:1234"
model = "test-model"

[overpass]
endpoint = "http://localhost:5678"

[listings]
data_file = "listings.json"
"#,
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();

        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.translator.model, "test-model");
        // Omitted sections and fields fall back to their defaults.
        assert_eq!(settings.translator.api_token, "");
        assert_eq!(settings.overpass.timeout_secs, 30);
        assert_eq!(settings.overpass.default_radius_m, 1000);
        assert_eq!(settings.filter.result_cap, 10);
        assert_eq!(settings.logging.level, "info");

        std::fs::remove_file(path).ok();
    }
}
