use crate::presentation::config::DeploymentMode;

pub const BRIDGE_NAME: &str = "Bazarr to OpenAI Whisper Bridge";
/// Release line in `major.minor` form, as older releases reported it.
pub const BRIDGE_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION_MAJOR"),
    ".",
    env!("CARGO_PKG_VERSION_MINOR")
);

/// Static facts reported by `/status` and `/detect-language`.
#[derive(Debug, Clone)]
pub struct BridgeInfo {
    pub deployment_mode: DeploymentMode,
    pub forced_language: String,
}

impl BridgeInfo {
    pub fn new(deployment_mode: DeploymentMode, forced_language: impl Into<String>) -> Self {
        Self {
            deployment_mode,
            forced_language: forced_language.into(),
        }
    }

    pub fn version_line(&self) -> String {
        format!(
            "{} ({}) v{}",
            BRIDGE_NAME, self.deployment_mode, BRIDGE_VERSION
        )
    }
}
