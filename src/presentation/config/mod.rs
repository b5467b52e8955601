mod deployment_mode;
mod settings;

pub use deployment_mode::DeploymentMode;
pub use settings::{
    BridgeSettings, CONFIG_FILE_ENV, FfmpegSettings, LoggingSettings, ProviderSettings,
    ServerSettings, Settings,
};
