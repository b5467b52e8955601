use std::env;
use std::time::Duration;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

pub const CONFIG_FILE_ENV: &str = "BRIDGE_CONFIG_FILE";
const DEFAULT_CONFIG_FILE: &str = "whisper-bridge";

/// Variable names understood by earlier releases of the bridge.
const LEGACY_OVERRIDES: [(&str, &str); 5] = [
    ("bridge.forced_language", "FORCE_DETECTED_LANGUAGE_TO"),
    ("bridge.whisper_model", "WHISPER_MODEL"),
    ("provider.api_key", "OPENAI_API_KEY"),
    ("provider.base_url", "OPENAI_BASE_URL"),
    ("provider.organization", "OPENAI_ORGANIZATION"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub bridge: BridgeSettings,
    pub provider: ProviderSettings,
    pub ffmpeg: FfmpegSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Largest accepted request body; 0 disables the limit.
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BridgeSettings {
    pub forced_language: String,
    pub whisper_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    pub api_key: String,
    pub base_url: String,
    #[serde(default)]
    pub organization: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FfmpegSettings {
    pub binary: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub filter: String,
    pub json: bool,
}

impl Settings {
    /// Defaults, then the optional config file, then `BRIDGE_*` variables,
    /// then the legacy variable names.
    pub fn load() -> Result<Self, ConfigError> {
        let config_file =
            env::var(CONFIG_FILE_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let mut builder = Self::builder_with_defaults()?
            .add_source(File::with_name(&config_file).required(false))
            .add_source(
                EnvironmentSource::with_prefix("BRIDGE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        for (key, variable) in LEGACY_OVERRIDES {
            let value = env::var(variable).ok().filter(|v| !v.is_empty());
            builder = builder.set_override_option(key, value)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Built-in defaults only, ignoring files and the environment.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder_with_defaults()?.build()?.try_deserialize()
    }

    fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 9000_i64)?
            .set_default("server.max_upload_mb", 1024_i64)?
            .set_default("bridge.forced_language", "en")?
            .set_default("bridge.whisper_model", "whisper-1")?
            .set_default("provider.api_key", "")?
            .set_default("provider.base_url", "https://api.openai.com/v1")?
            .set_default("provider.timeout_secs", 1800_i64)?
            .set_default("ffmpeg.binary", "ffmpeg")?
            .set_default("ffmpeg.timeout_secs", 600_i64)?
            .set_default("logging.filter", "info,whisper_bridge=debug,tower_http=info")?
            .set_default("logging.json", false)
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn max_upload_bytes(&self) -> Option<usize> {
        match self.server.max_upload_mb {
            0 => None,
            mb => Some(mb * 1024 * 1024),
        }
    }
}

impl ProviderSettings {
    pub fn timeout(&self) -> Option<Duration> {
        non_zero_secs(self.timeout_secs)
    }
}

impl FfmpegSettings {
    pub fn timeout(&self) -> Option<Duration> {
        non_zero_secs(self.timeout_secs)
    }
}

fn non_zero_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
