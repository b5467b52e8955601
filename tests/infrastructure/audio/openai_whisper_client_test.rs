use whisper_bridge::application::ports::{
    RemoteServiceError, SpeechToTextService, TranscriptionRequest, TranslationRequest,
};
use whisper_bridge::domain::EncodedAudio;
use whisper_bridge::infrastructure::audio::{OPENAI_BASE_URL, OpenAiWhisperClient};

use crate::helpers::mock_openai::start_mock_openai_server;
use crate::helpers::{SAMPLE_SRT, collect_stream};

fn client(base_url: &str, api_key: &str) -> OpenAiWhisperClient {
    OpenAiWhisperClient::new(api_key.to_string(), Some(base_url.to_string()), None, None)
        .unwrap()
}

fn transcription(language: Option<&str>) -> TranscriptionRequest {
    TranscriptionRequest {
        model: "whisper-1".to_string(),
        audio: EncodedAudio::ogg_opus(b"OggS fake opus".to_vec()),
        response_format: "srt",
        language: language.map(String::from),
    }
}

fn translation() -> TranslationRequest {
    TranslationRequest {
        model: "whisper-1".to_string(),
        audio: EncodedAudio::ogg_opus(b"OggS fake opus".to_vec()),
        response_format: "srt",
    }
}

#[tokio::test]
async fn given_transcription_with_language_when_sent_then_multipart_carries_all_fields() {
    let server = start_mock_openai_server(200, SAMPLE_SRT).await;
    let client = client(&server.base_url, "test-key");

    let body = client.transcribe(transcription(Some("de"))).await.unwrap();

    assert_eq!(collect_stream(body).await, SAMPLE_SRT);
    let uploads = server.uploads();
    assert_eq!(uploads.len(), 1);
    let upload = &uploads[0];
    assert_eq!(upload.operation, "transcriptions");
    assert_eq!(upload.authorization.as_deref(), Some("Bearer test-key"));
    assert_eq!(upload.fields.get("model").map(String::as_str), Some("whisper-1"));
    assert_eq!(upload.fields.get("response_format").map(String::as_str), Some("srt"));
    assert_eq!(upload.fields.get("language").map(String::as_str), Some("de"));
    assert_eq!(upload.file_name.as_deref(), Some("file.ogg"));
    assert_eq!(upload.file_content_type.as_deref(), Some("audio/ogg"));
    assert_eq!(upload.file_bytes, b"OggS fake opus");
    server.shutdown();
}

#[tokio::test]
async fn given_transcription_without_language_when_sent_then_language_field_is_absent() {
    let server = start_mock_openai_server(200, SAMPLE_SRT).await;
    let client = client(&server.base_url, "test-key");

    client.transcribe(transcription(None)).await.unwrap();

    assert!(!server.uploads()[0].fields.contains_key("language"));
    server.shutdown();
}

#[tokio::test]
async fn given_translation_when_sent_then_translations_endpoint_is_used_without_language() {
    let server = start_mock_openai_server(200, SAMPLE_SRT).await;
    let client = client(&server.base_url, "test-key");

    let body = client.translate(translation()).await.unwrap();

    assert_eq!(collect_stream(body).await, SAMPLE_SRT);
    let upload = &server.uploads()[0];
    assert_eq!(upload.operation, "translations");
    assert!(!upload.fields.contains_key("language"));
    assert_eq!(upload.fields.get("response_format").map(String::as_str), Some("srt"));
    server.shutdown();
}

#[tokio::test]
async fn given_base_url_with_trailing_slash_when_sent_then_endpoint_is_joined_cleanly() {
    let server = start_mock_openai_server(200, SAMPLE_SRT).await;
    let client = client(&format!("{}/", server.base_url), "test-key");

    let result = client.transcribe(transcription(None)).await;

    assert!(result.is_ok());
    assert_eq!(server.uploads().len(), 1);
    server.shutdown();
}

#[tokio::test]
async fn given_empty_api_key_when_sent_then_no_authorization_header() {
    let server = start_mock_openai_server(200, SAMPLE_SRT).await;
    let client = client(&server.base_url, "");

    client.transcribe(transcription(None)).await.unwrap();

    assert_eq!(server.uploads()[0].authorization, None);
    server.shutdown();
}

#[tokio::test]
async fn given_unauthorized_status_when_sent_then_returns_unauthorized() {
    let server =
        start_mock_openai_server(401, r#"{"error": {"message": "Incorrect API key"}}"#).await;
    let client = client(&server.base_url, "sk-invalid");

    let result = client.transcribe(transcription(None)).await;

    assert!(matches!(
        result,
        Err(RemoteServiceError::Unauthorized(body)) if body.contains("Incorrect API key")
    ));
    server.shutdown();
}

#[tokio::test]
async fn given_rate_limit_status_when_sent_then_returns_rate_limited() {
    let server = start_mock_openai_server(429, "slow down").await;
    let client = client(&server.base_url, "test-key");

    let result = client.translate(translation()).await;

    assert!(matches!(result, Err(RemoteServiceError::RateLimited(_))));
    server.shutdown();
}

#[tokio::test]
async fn given_server_error_status_when_sent_then_returns_status_error_with_body() {
    let server = start_mock_openai_server(400, "Invalid file format.").await;
    let client = client(&server.base_url, "test-key");

    let result = client.transcribe(transcription(None)).await;

    let Err(error) = result else {
        panic!("expected an error");
    };
    assert!(matches!(error, RemoteServiceError::Status { status: 400, .. }));
    assert_eq!(error.to_string(), "HTTP 400: Invalid file format.");
    server.shutdown();
}

#[tokio::test]
async fn given_unreachable_server_when_sent_then_returns_request_error() {
    let client = client("http://127.0.0.1:1/v1", "test-key");

    let result = client.transcribe(transcription(None)).await;

    assert!(matches!(result, Err(RemoteServiceError::Request(_))));
}

#[test]
fn given_no_base_url_when_creating_client_then_default_provider_is_used() {
    let client = OpenAiWhisperClient::new("key".to_string(), None, None, None).unwrap();

    assert_eq!(client.base_url(), OPENAI_BASE_URL);
}
