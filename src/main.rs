use std::sync::Arc;

use tokio::net::TcpListener;

use whisper_bridge::application::services::{
    AsrService, DEFAULT_PROVIDER_BASE_URL, PROVIDER_PAYLOAD_LIMIT_MIB, PayloadSizeGuard,
};
use whisper_bridge::infrastructure::audio::{
    FfmpegOpusTranscoder, OpenAiWhisperClient, check_ffmpeg_binary,
};
use whisper_bridge::infrastructure::observability::{TracingConfig, init_tracing};
use whisper_bridge::presentation::state::{BRIDGE_NAME, BRIDGE_VERSION};
use whisper_bridge::presentation::{AppState, BridgeInfo, DeploymentMode, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    let deployment_mode = DeploymentMode::detect();

    init_tracing(&TracingConfig {
        default_filter: settings.logging.filter.clone(),
        json_format: settings.logging.json,
        deployment_mode: deployment_mode.to_string(),
    });

    match check_ffmpeg_binary(&settings.ffmpeg.binary).await {
        Ok(version) => tracing::info!(binary = %settings.ffmpeg.binary, %version, "ffmpeg found"),
        Err(e) => tracing::warn!(
            binary = %settings.ffmpeg.binary,
            error = %e,
            "ffmpeg is not usable, /asr requests will fail"
        ),
    }

    if settings.provider.api_key.is_empty() {
        tracing::warn!("No API key configured, requests are sent unauthenticated");
    }

    let transcoder = Arc::new(FfmpegOpusTranscoder::new(
        settings.ffmpeg.binary.clone(),
        settings.ffmpeg.timeout(),
    ));
    let speech_client = Arc::new(OpenAiWhisperClient::new(
        settings.provider.api_key.clone(),
        Some(settings.provider.base_url.clone()),
        settings.provider.organization.clone(),
        settings.provider.timeout(),
    )?);

    let asr_service = Arc::new(AsrService::new(
        transcoder,
        speech_client,
        settings.bridge.whisper_model.clone(),
        PayloadSizeGuard::new(PROVIDER_PAYLOAD_LIMIT_MIB, DEFAULT_PROVIDER_BASE_URL),
    ));

    let state = AppState {
        asr_service,
        bridge_info: BridgeInfo::new(deployment_mode, settings.bridge.forced_language.clone()),
        max_upload_bytes: settings.max_upload_bytes(),
    };

    let router = create_router(state);

    tracing::info!(
        "Running {} ({}) v{} using model: {}",
        BRIDGE_NAME,
        deployment_mode,
        BRIDGE_VERSION,
        settings.bridge.whisper_model
    );

    let addr = settings.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, base_url = %settings.provider.base_url, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
