use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{AudioTranscoder, SpeechToTextService};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct DetectLanguageResponse {
    pub detected_language: String,
    pub language_code: String,
}

/// No detection happens: the configured language is always reported and the
/// uploaded audio is never read.
pub async fn detect_language_handler<T, S>(
    State(state): State<AppState<T, S>>,
) -> impl IntoResponse
where
    T: AudioTranscoder + 'static,
    S: SpeechToTextService + 'static,
{
    let language_code = state.bridge_info.forced_language.clone();
    tracing::info!(language_code = %language_code, "Forced detected language");

    Json(DetectLanguageResponse {
        detected_language: format!("Forced to {} from WhisperBridge", language_code),
        language_code,
    })
}
