use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};

use crate::application::ports::{
    RemoteServiceError, SpeechToTextService, SubtitleStream, TranscriptionRequest,
    TranslationRequest,
};
use crate::domain::EncodedAudio;

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for `/audio/transcriptions` and `/audio/translations` of the
/// OpenAI API or any server that mirrors it.
pub struct OpenAiWhisperClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    organization: Option<String>,
}

impl OpenAiWhisperClient {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        organization: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, RemoteServiceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RemoteServiceError::Request(format!("client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.unwrap_or_else(|| OPENAI_BASE_URL.to_string()),
            organization,
        })
    }

    fn endpoint(&self, operation: &str) -> String {
        format!("{}/audio/{}", self.base_url.trim_end_matches('/'), operation)
    }

    fn audio_part(audio: &EncodedAudio) -> Result<Part, RemoteServiceError> {
        Part::stream_with_length(audio.data().clone(), audio.len() as u64)
            .file_name(audio.file_name())
            .mime_str(audio.mime_type())
            .map_err(|e| RemoteServiceError::Request(format!("mime: {}", e)))
    }

    async fn post_audio(
        &self,
        operation: &'static str,
        form: Form,
    ) -> Result<SubtitleStream, RemoteServiceError> {
        let url = self.endpoint(operation);

        let mut request = self.client.post(&url).multipart(form);
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }
        if let Some(organization) = &self.organization {
            request = request.header("OpenAI-Organization", organization);
        }

        let response = request.send().await.map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    RemoteServiceError::Unauthorized(body)
                }
                StatusCode::TOO_MANY_REQUESTS => RemoteServiceError::RateLimited(body),
                _ => RemoteServiceError::Status {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        tracing::debug!(
            operation,
            content_length = ?response.content_length(),
            "OpenAI Whisper response received"
        );

        Ok(Box::pin(
            response
                .bytes_stream()
                .map(|chunk| chunk.map_err(stream_error)),
        ))
    }
}

#[async_trait]
impl SpeechToTextService for OpenAiWhisperClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn transcribe(
        &self,
        request: TranscriptionRequest,
    ) -> Result<SubtitleStream, RemoteServiceError> {
        let mut form = Form::new()
            .text("model", request.model.clone())
            .text("response_format", request.response_format)
            .part("file", Self::audio_part(&request.audio)?);
        if let Some(language) = request.language {
            form = form.text("language", language);
        }

        tracing::debug!(
            model = %request.model,
            bytes = request.audio.len(),
            "Sending audio to OpenAI Whisper transcription"
        );

        self.post_audio("transcriptions", form).await
    }

    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<SubtitleStream, RemoteServiceError> {
        let form = Form::new()
            .text("model", request.model.clone())
            .text("response_format", request.response_format)
            .part("file", Self::audio_part(&request.audio)?);

        tracing::debug!(
            model = %request.model,
            bytes = request.audio.len(),
            "Sending audio to OpenAI Whisper translation"
        );

        self.post_audio("translations", form).await
    }
}

fn request_error(e: reqwest::Error) -> RemoteServiceError {
    if e.is_timeout() {
        RemoteServiceError::Timeout(e.to_string())
    } else {
        RemoteServiceError::Request(e.to_string())
    }
}

fn stream_error(e: reqwest::Error) -> RemoteServiceError {
    if e.is_timeout() {
        RemoteServiceError::Timeout(e.to_string())
    } else {
        RemoteServiceError::Stream(e.to_string())
    }
}
