use std::fmt;
use std::path::Path;

/// How the bridge is being run. Only reported in `/status` and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentMode {
    Docker,
    Standalone,
}

impl DeploymentMode {
    pub const DOCKER_MARKER: &'static str = "/.dockerenv";

    pub fn detect() -> Self {
        Self::from_marker(Path::new(Self::DOCKER_MARKER))
    }

    pub fn from_marker(marker: &Path) -> Self {
        if marker.exists() {
            DeploymentMode::Docker
        } else {
            DeploymentMode::Standalone
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentMode::Docker => "Docker",
            DeploymentMode::Standalone => "Standalone",
        }
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
