use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{AudioTranscoder, SpeechToTextService};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct StatusResponse {
    pub version: String,
}

pub async fn status_handler<T, S>(State(state): State<AppState<T, S>>) -> impl IntoResponse
where
    T: AudioTranscoder + 'static,
    S: SpeechToTextService + 'static,
{
    Json(StatusResponse {
        version: state.bridge_info.version_line(),
    })
}
