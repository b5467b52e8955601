/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub default_filter: String,
    pub json_format: bool,
    pub deployment_mode: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_filter: "info,whisper_bridge=debug,tower_http=info".to_string(),
            json_format: false,
            deployment_mode: "Standalone".to_string(),
        }
    }
}
