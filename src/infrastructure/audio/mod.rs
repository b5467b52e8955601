mod ffmpeg_opus_transcoder;
mod openai_whisper_client;

pub use ffmpeg_opus_transcoder::{
    DEFAULT_FFMPEG_BINARY, FfmpegOpusTranscoder, OpusProfile, check_ffmpeg_binary,
};
pub use openai_whisper_client::{OPENAI_BASE_URL, OpenAiWhisperClient};
