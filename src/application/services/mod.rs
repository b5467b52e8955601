mod asr_service;
mod request_timer;
mod size_guard;
mod subtitle_streamer;

pub use asr_service::{AsrError, AsrService};
pub use request_timer::{RequestTimer, completion_message};
pub use size_guard::{
    DEFAULT_PROVIDER_BASE_URL, PROVIDER_PAYLOAD_LIMIT_MIB, PayloadSizeGuard, PayloadTooLargeError,
};
pub use subtitle_streamer::{SubtitleOutcome, prepare_subtitle_stream};
