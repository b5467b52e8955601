use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Remote operation requested by the subtitle tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AsrTask {
    #[default]
    Transcribe,
    Translate,
}

impl AsrTask {
    pub fn as_str(&self) -> &'static str {
        match self {
            AsrTask::Transcribe => "transcribe",
            AsrTask::Translate => "translate",
        }
    }
}

impl FromStr for AsrTask {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "transcribe" => Ok(AsrTask::Transcribe),
            "translate" => Ok(AsrTask::Translate),
            other => Err(format!(
                "Invalid task: {}. Expected: transcribe or translate",
                other
            )),
        }
    }
}

impl fmt::Display for AsrTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
