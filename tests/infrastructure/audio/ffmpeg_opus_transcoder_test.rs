use std::time::Duration;

use whisper_bridge::application::ports::{AudioTranscoder, TranscodeError};
use whisper_bridge::domain::RawAudio;
use whisper_bridge::infrastructure::audio::{
    FfmpegOpusTranscoder, OpusProfile, check_ffmpeg_binary,
};

use crate::helpers::{ffmpeg_available, sine_wave_pcm};

#[tokio::test]
async fn given_ten_second_clip_when_encoding_then_returns_ogg_opus_payload() {
    if !ffmpeg_available() {
        return;
    }

    let pcm = sine_wave_pcm(10);
    let transcoder = FfmpegOpusTranscoder::default();

    let encoded = transcoder.encode(&RawAudio::new(pcm.clone())).await.unwrap();

    assert!(!encoded.is_empty());
    assert!(encoded.data().starts_with(b"OggS"));
    assert!(encoded.len() < pcm.len() / 10, "12 kbit/s should be far smaller than PCM");
    assert_eq!(encoded.file_name(), "file.ogg");
}

#[tokio::test]
async fn given_identical_input_when_encoding_twice_then_output_is_identical() {
    if !ffmpeg_available() {
        return;
    }

    let raw = RawAudio::new(sine_wave_pcm(2));
    let transcoder = FfmpegOpusTranscoder::default();

    let first = transcoder.encode(&raw).await.unwrap();
    let second = transcoder.encode(&raw).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn given_timeout_configured_when_encoding_short_clip_then_finishes_in_time() {
    if !ffmpeg_available() {
        return;
    }

    let transcoder = FfmpegOpusTranscoder::new("ffmpeg", Some(Duration::from_secs(60)));

    let result = transcoder.encode(&RawAudio::new(sine_wave_pcm(1))).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn given_empty_audio_when_encoding_then_returns_empty_input_error() {
    let transcoder = FfmpegOpusTranscoder::default();

    let result = transcoder.encode(&RawAudio::new(Vec::new())).await;

    assert!(matches!(result, Err(TranscodeError::EmptyInput)));
}

#[tokio::test]
async fn given_missing_binary_when_encoding_then_returns_unexpected_error() {
    let transcoder = FfmpegOpusTranscoder::new("ffmpeg-does-not-exist-here", None);

    let result = transcoder.encode(&RawAudio::new(vec![0u8; 64])).await;

    assert!(matches!(result, Err(TranscodeError::Unexpected(_))));
}

#[cfg(unix)]
#[tokio::test]
async fn given_tool_exits_with_failure_when_encoding_then_returns_tool_failed() {
    let transcoder = FfmpegOpusTranscoder::new("false", None);

    let result = transcoder.encode(&RawAudio::new(vec![0u8; 64])).await;

    match result {
        Err(TranscodeError::ToolFailed(diagnostic)) => {
            assert!(diagnostic.contains("exit"), "{}", diagnostic)
        }
        other => panic!("expected ToolFailed, got {:?}", other),
    }
}

#[test]
fn given_default_transcoder_when_reading_profile_then_uses_voice_profile() {
    let transcoder = FfmpegOpusTranscoder::default();

    assert_eq!(transcoder.binary(), "ffmpeg");
    assert_eq!(*transcoder.profile(), OpusProfile::VOICE);
    assert_eq!(OpusProfile::VOICE.sample_rate_hz, 16_000);
    assert_eq!(OpusProfile::VOICE.channels, 1);
    assert_eq!(OpusProfile::VOICE.bitrate, "12k");
}

#[tokio::test]
async fn given_ffmpeg_in_path_when_checking_binary_then_returns_version_banner() {
    if !ffmpeg_available() {
        return;
    }

    let version = check_ffmpeg_binary("ffmpeg").await.unwrap();

    assert!(version.starts_with("ffmpeg version"), "{}", version);
}

#[tokio::test]
async fn given_missing_binary_when_checking_then_returns_error() {
    let result = check_ffmpeg_binary("ffmpeg-does-not-exist-here").await;

    assert!(result.is_err());
}
