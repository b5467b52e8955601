mod asr_request;
mod asr_task;
mod audio;

pub use asr_request::AsrRequest;
pub use asr_task::AsrTask;
pub use audio::{EncodedAudio, RawAudio, bytes_to_mib};
