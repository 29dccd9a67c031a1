use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::ServiceKind;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub cors: CorsSettings,
    #[serde(default)]
    pub playlist: PlaylistSettings,
    #[serde(default)]
    pub upload: UploadSettings,
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
pub struct CorsSettings {
    pub allowed_origin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistSettings {
    #[serde(default = "default_min_size")]
    pub min_size: usize,
    #[serde(default = "default_max_size")]
    pub max_size: usize,
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        Self {
            min_size: default_min_size(),
            max_size: default_max_size(),
        }
    }
}

fn default_min_size() -> usize { 8 }
fn default_max_size() -> usize { 12 }

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self { max_bytes: default_max_bytes() }
    }
}

fn default_max_bytes() -> usize { 10 * 1024 * 1024 }

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

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

impl Settings {
    /// Load configuration for a service from defaults, files and environment
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Per-service defaults (host, port, CORS origin)
    /// 2. Configuration file (config/default.toml)
    /// 3. Local override file (config/local.toml)
    /// 4. Environment variables (prefixed with HACKMIX_)
    pub fn load(service: ServiceKind) -> Result<Self, ConfigError> {
        let settings = with_service_defaults(Config::builder(), service)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HACKMIX__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }

    /// Defaults only, no files or environment
    pub fn defaults(service: ServiceKind) -> Result<Self, ConfigError> {
        with_service_defaults(Config::builder(), service)?
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("HACKMIX")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn with_service_defaults(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    service: ServiceKind,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", i64::from(service.default_port()))?
        .set_default("server.workers", 4)?
        .set_default("cors.allowed_origin", DEFAULT_ALLOWED_ORIGIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_defaults() {
        let playlist = Settings::defaults(ServiceKind::Playlist).unwrap();
        assert_eq!(playlist.server.port, 8000);
        assert_eq!(playlist.server.host, "0.0.0.0");
        assert_eq!(playlist.server.workers, Some(4));
        assert_eq!(playlist.cors.allowed_origin, "http://localhost:5173");

        let visualizer = Settings::defaults(ServiceKind::Visualizer).unwrap();
        assert_eq!(visualizer.server.port, 8001);
    }

    #[test]
    fn test_default_sections() {
        let settings = Settings::defaults(ServiceKind::Playlist).unwrap();
        assert_eq!(settings.playlist.min_size, 8);
        assert_eq!(settings.playlist.max_size, 12);
        assert_eq!(settings.upload.max_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }
}
