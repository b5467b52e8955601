use async_trait::async_trait;

use crate::domain::{EncodedAudio, RawAudio};

#[async_trait]
pub trait AudioTranscoder: Send + Sync {
    /// Converts raw request audio into the compressed upload payload.
    async fn encode(&self, raw: &RawAudio) -> Result<EncodedAudio, TranscodeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    /// The transcoding tool ran and rejected the input; carries its diagnostic output.
    #[error("FFmpeg error: {0}")]
    ToolFailed(String),
    #[error("FFmpeg error: no audio data received")]
    EmptyInput,
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
