use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{AudioTranscoder, SpeechToTextService};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{asr_handler, detect_language_handler, status_handler};
use crate::presentation::state::AppState;

pub fn create_router<T, S>(state: AppState<T, S>) -> Router
where
    T: AudioTranscoder + 'static,
    S: SpeechToTextService + 'static,
{
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Raw PCM is large: an hour of 16 kHz mono s16le is ~110 MiB.
    let body_limit = match state.max_upload_bytes {
        Some(limit) => DefaultBodyLimit::max(limit),
        None => DefaultBodyLimit::disable(),
    };

    Router::new()
        .route("/status", get(status_handler::<T, S>))
        .route("/detect-language", post(detect_language_handler::<T, S>))
        .route("/asr", post(asr_handler::<T, S>))
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .with_state(state)
}
