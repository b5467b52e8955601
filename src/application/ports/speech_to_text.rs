use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::Stream;

use crate::domain::EncodedAudio;

/// Subtitle output format requested from the remote service.
pub const SUBTITLE_RESPONSE_FORMAT: &str = "srt";

pub type SubtitleStream =
    Pin<Box<dyn Stream<Item = Result<Bytes, RemoteServiceError>> + Send + 'static>>;

#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub model: String,
    pub audio: EncodedAudio,
    pub response_format: &'static str,
    /// `None` lets the remote service detect the language.
    pub language: Option<String>,
}

/// Translation always targets English, so no language hint exists here.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub model: String,
    pub audio: EncodedAudio,
    pub response_format: &'static str,
}

#[async_trait]
pub trait SpeechToTextService: Send + Sync {
    /// Base URL the payloads are sent to.
    fn base_url(&self) -> &str;

    async fn transcribe(
        &self,
        request: TranscriptionRequest,
    ) -> Result<SubtitleStream, RemoteServiceError>;

    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<SubtitleStream, RemoteServiceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RemoteServiceError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("authentication failed: {0}")]
    Unauthorized(String),
    #[error("rate limited: {0}")]
    RateLimited(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("response stream failed: {0}")]
    Stream(String),
}
