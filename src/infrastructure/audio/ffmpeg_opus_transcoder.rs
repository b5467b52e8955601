use std::process::{Output, Stdio};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{AudioTranscoder, TranscodeError};
use crate::domain::{EncodedAudio, RawAudio};

pub const DEFAULT_FFMPEG_BINARY: &str = "ffmpeg";

/// libopus settings for the upload payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpusProfile {
    pub sample_rate_hz: u32,
    pub channels: u16,
    pub bitrate: &'static str,
    pub application: &'static str,
}

impl OpusProfile {
    /// Mono 16 kHz at 12 kbit/s in VoIP mode. Good enough for speech and far
    /// below the provider's upload limit for feature-length audio.
    pub const VOICE: Self = Self {
        sample_rate_hz: 16_000,
        channels: 1,
        bitrate: "12k",
        application: "voip",
    };
}

/// Transcodes raw s16le PCM to Ogg/Opus by piping it through `ffmpeg`.
pub struct FfmpegOpusTranscoder {
    binary: String,
    profile: OpusProfile,
    timeout: Option<Duration>,
}

impl FfmpegOpusTranscoder {
    pub fn new(binary: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            binary: binary.into(),
            profile: OpusProfile::VOICE,
            timeout,
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    pub fn profile(&self) -> &OpusProfile {
        &self.profile
    }

    fn arguments(&self) -> Vec<String> {
        let input_rate = RawAudio::SAMPLE_RATE_HZ.to_string();
        let input_channels = RawAudio::CHANNELS.to_string();
        let output_rate = self.profile.sample_rate_hz.to_string();
        let output_channels = self.profile.channels.to_string();

        [
            "-hide_banner",
            "-loglevel",
            "error",
            "-f",
            RawAudio::SAMPLE_FORMAT,
            "-ar",
            input_rate.as_str(),
            "-ac",
            input_channels.as_str(),
            "-i",
            "pipe:0",
            "-map_metadata",
            "-1",
            "-c:a",
            "libopus",
            "-b:a",
            self.profile.bitrate,
            "-application",
            self.profile.application,
            "-ac",
            output_channels.as_str(),
            "-ar",
            output_rate.as_str(),
            // Fixed stream serials and no encoder tag: identical input, identical bytes.
            "-fflags",
            "+bitexact",
            "-flags:a",
            "+bitexact",
            "-f",
            "opus",
            "pipe:1",
        ]
        .iter()
        .map(|arg| arg.to_string())
        .collect()
    }

    async fn run(&self, input: Bytes) -> Result<Output, TranscodeError> {
        let mut child = Command::new(&self.binary)
            .args(self.arguments())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                TranscodeError::Unexpected(format!("failed to start {}: {}", self.binary, e))
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| TranscodeError::Unexpected("ffmpeg stdin not captured".to_string()))?;

        // Feed stdin concurrently so a full stdout pipe cannot stall the write.
        let writer = tokio::spawn(async move {
            stdin.write_all(&input).await?;
            stdin.shutdown().await
        });

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| {
                    TranscodeError::Unexpected(format!(
                        "ffmpeg did not finish within {} seconds",
                        limit.as_secs()
                    ))
                })?,
            None => child.wait_with_output().await,
        }
        .map_err(|e| TranscodeError::Unexpected(format!("waiting for ffmpeg: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let diagnostic = if stderr.is_empty() {
                format!("ffmpeg exited with {}", output.status)
            } else {
                stderr
            };
            return Err(TranscodeError::ToolFailed(diagnostic));
        }

        match writer.await {
            Ok(Ok(())) => Ok(output),
            Ok(Err(e)) => Err(TranscodeError::Unexpected(format!(
                "writing audio to ffmpeg: {}",
                e
            ))),
            Err(e) => Err(TranscodeError::Unexpected(format!(
                "ffmpeg stdin task failed: {}",
                e
            ))),
        }
    }
}

impl Default for FfmpegOpusTranscoder {
    fn default() -> Self {
        Self::new(DEFAULT_FFMPEG_BINARY, None)
    }
}

#[async_trait]
impl AudioTranscoder for FfmpegOpusTranscoder {
    async fn encode(&self, raw: &RawAudio) -> Result<EncodedAudio, TranscodeError> {
        if raw.is_empty() {
            return Err(TranscodeError::EmptyInput);
        }

        tracing::debug!(
            binary = %self.binary,
            raw_bytes = raw.len(),
            bitrate = self.profile.bitrate,
            "Transcoding PCM to Opus"
        );

        let output = self.run(raw.to_bytes()).await?;

        if output.stdout.is_empty() {
            return Err(TranscodeError::ToolFailed(
                "ffmpeg produced no output".to_string(),
            ));
        }

        Ok(EncodedAudio::ogg_opus(output.stdout))
    }
}

/// Runs `<binary> -version` and returns the first line of its banner.
pub async fn check_ffmpeg_binary(binary: &str) -> Result<String, TranscodeError> {
    let output = Command::new(binary)
        .arg("-version")
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|e| TranscodeError::Unexpected(format!("failed to start {}: {}", binary, e)))?;

    if !output.status.success() {
        return Err(TranscodeError::ToolFailed(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .unwrap_or_default()
        .to_string())
}
