use axum::body::Body;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Multipart, Query, State};
use axum::http::{HeaderName, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::application::ports::{AudioTranscoder, SpeechToTextService};
use crate::application::services::SubtitleOutcome;
use crate::domain::{AsrRequest, AsrTask, RawAudio};
use crate::presentation::state::AppState;

use super::error::ApiError;

pub const AUDIO_FIELD: &str = "audio_file";
pub const SUBTITLE_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
pub const SOURCE_HEADER: &str = "source";
pub const SOURCE_HEADER_VALUE: &str = "Transcribed using Bazarr to OpenAI Whisper Bridge!";

/// Query string of `/asr`. Parameters Bazarr sends that the bridge has no use
/// for (`encode`, `output`, `word_timestamps`, ...) are ignored.
#[derive(Debug, Deserialize)]
pub struct AsrQuery {
    #[serde(default)]
    pub task: AsrTask,
    pub language: Option<String>,
    pub video_file: Option<String>,
}

#[tracing::instrument(skip_all)]
pub async fn asr_handler<T, S>(
    State(state): State<AppState<T, S>>,
    query: Result<Query<AsrQuery>, QueryRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    T: AudioTranscoder + 'static,
    S: SpeechToTextService + 'static,
{
    let Query(query) = match query {
        Ok(query) => query,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected ASR query");
            return ApiError::unprocessable(e.body_text()).into_response();
        }
    };

    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(e) => {
            tracing::warn!(error = %e, "ASR request is not multipart");
            return ApiError::unprocessable(e.body_text()).into_response();
        }
    };

    let audio = match read_audio_field(&mut multipart).await {
        Ok(Some(audio)) => audio,
        Ok(None) => {
            tracing::warn!("ASR request without {} field", AUDIO_FIELD);
            let detail = format!("Missing multipart field: {}", AUDIO_FIELD);
            return ApiError::unprocessable(detail).into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read uploaded audio");
            let detail = format!("Failed to read {}: {}", AUDIO_FIELD, e.body_text());
            return ApiError::new(e.status(), detail).into_response();
        }
    };

    tracing::debug!(
        task = %query.task,
        raw_bytes = audio.len(),
        video_file = query.video_file.as_deref().unwrap_or("-"),
        "ASR request received"
    );

    let request = AsrRequest {
        task: query.task,
        language: query.language.filter(|language| !language.is_empty()),
        audio,
        video_file: query.video_file,
    };

    match state.asr_service.handle(request).await {
        Ok(SubtitleOutcome::Stream(body)) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, SUBTITLE_CONTENT_TYPE),
                (HeaderName::from_static(SOURCE_HEADER), SOURCE_HEADER_VALUE),
            ],
            Body::from_stream(body),
        )
            .into_response(),
        Ok(SubtitleOutcome::Empty) => {
            tracing::warn!("Remote service returned an empty result");
            StatusCode::OK.into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

async fn read_audio_field(multipart: &mut Multipart) -> Result<Option<RawAudio>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(AUDIO_FIELD) {
            let data = field.bytes().await?;
            return Ok(Some(RawAudio::new(data)));
        }
    }
    Ok(None)
}
