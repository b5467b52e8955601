use super::{AsrTask, RawAudio};

/// One `/asr` call, after query validation and multipart extraction.
#[derive(Debug, Clone)]
pub struct AsrRequest {
    pub task: AsrTask,
    pub language: Option<String>,
    pub audio: RawAudio,
    /// Display name of the video the audio came from. Only used in logs.
    pub video_file: Option<String>,
}

impl AsrRequest {
    pub fn new(task: AsrTask, audio: RawAudio) -> Self {
        Self {
            task,
            language: None,
            audio,
            video_file: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_video_file(mut self, video_file: impl Into<String>) -> Self {
        self.video_file = Some(video_file.into());
        self
    }
}
