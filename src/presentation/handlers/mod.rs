mod asr;
mod detect_language;
mod error;
mod status;

pub use asr::{
    AUDIO_FIELD, AsrQuery, SOURCE_HEADER, SOURCE_HEADER_VALUE, SUBTITLE_CONTENT_TYPE, asr_handler,
};
pub use detect_language::{DetectLanguageResponse, detect_language_handler};
pub use error::{ApiError, ErrorResponse};
pub use status::{StatusResponse, status_handler};
