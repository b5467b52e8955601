mod audio_transcoder;
mod speech_to_text;

pub use audio_transcoder::{AudioTranscoder, TranscodeError};
pub use speech_to_text::{
    RemoteServiceError, SUBTITLE_RESPONSE_FORMAT, SpeechToTextService, SubtitleStream,
    TranscriptionRequest, TranslationRequest,
};
