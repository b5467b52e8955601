use std::sync::Arc;

use crate::application::ports::{
    AudioTranscoder, RemoteServiceError, SUBTITLE_RESPONSE_FORMAT, SpeechToTextService,
    SubtitleStream, TranscodeError, TranscriptionRequest, TranslationRequest,
};
use crate::domain::{AsrRequest, AsrTask, EncodedAudio};

use super::request_timer::RequestTimer;
use super::size_guard::{PayloadSizeGuard, PayloadTooLargeError};
use super::subtitle_streamer::{SubtitleOutcome, prepare_subtitle_stream};

#[derive(Debug, thiserror::Error)]
pub enum AsrError {
    #[error(transparent)]
    Transcode(#[from] TranscodeError),
    #[error(transparent)]
    PayloadTooLarge(#[from] PayloadTooLargeError),
    #[error(transparent)]
    RemoteService(#[from] RemoteServiceError),
}

/// Transcode, size-check, dispatch and relay for a single `/asr` request.
pub struct AsrService<T, S>
where
    T: AudioTranscoder,
    S: SpeechToTextService,
{
    transcoder: Arc<T>,
    speech_service: Arc<S>,
    model: String,
    size_guard: PayloadSizeGuard,
}

impl<T, S> AsrService<T, S>
where
    T: AudioTranscoder,
    S: SpeechToTextService,
{
    pub fn new(
        transcoder: Arc<T>,
        speech_service: Arc<S>,
        model: String,
        size_guard: PayloadSizeGuard,
    ) -> Self {
        Self {
            transcoder,
            speech_service,
            model,
            size_guard,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    #[tracing::instrument(
        skip(self, request),
        fields(task = %request.task, raw_bytes = request.audio.len())
    )]
    pub async fn handle(&self, request: AsrRequest) -> Result<SubtitleOutcome, AsrError> {
        let timer = RequestTimer::start();

        let encoded = self.transcoder.encode(&request.audio).await?;
        tracing::debug!(
            audio_secs = request.audio.duration_secs(),
            encoded_bytes = encoded.len(),
            "Audio transcoded to Opus"
        );

        if let Err(e) = self
            .size_guard
            .check(encoded.len(), self.speech_service.base_url())
        {
            tracing::warn!(size_mib = e.size_mib, limit_mib = e.limit_mib, "{}", e);
            return Err(e.into());
        }

        let body = self.dispatch(request.task, request.language, encoded).await?;
        let outcome = prepare_subtitle_stream(body).await?;

        tracing::info!("{}", timer.completion_message(request.video_file.as_deref()));

        Ok(outcome)
    }

    async fn dispatch(
        &self,
        task: AsrTask,
        language: Option<String>,
        audio: EncodedAudio,
    ) -> Result<SubtitleStream, RemoteServiceError> {
        match task {
            AsrTask::Transcribe => {
                tracing::info!(
                    model = %self.model,
                    language = language.as_deref().unwrap_or("auto"),
                    "Got a transcribe task from Bazarr"
                );
                self.speech_service
                    .transcribe(TranscriptionRequest {
                        model: self.model.clone(),
                        audio,
                        response_format: SUBTITLE_RESPONSE_FORMAT,
                        language,
                    })
                    .await
            }
            AsrTask::Translate => {
                if let Some(ignored) = language.as_deref() {
                    tracing::debug!(language = ignored, "Language hint not forwarded for translation");
                }
                tracing::info!(model = %self.model, "Got a translate task from Bazarr");
                self.speech_service
                    .translate(TranslationRequest {
                        model: self.model.clone(),
                        audio,
                        response_format: SUBTITLE_RESPONSE_FORMAT,
                    })
                    .await
            }
        }
    }
}
