use std::sync::Arc;

use crate::application::ports::{AudioTranscoder, SpeechToTextService};
use crate::application::services::AsrService;

use super::BridgeInfo;

pub struct AppState<T, S>
where
    T: AudioTranscoder,
    S: SpeechToTextService,
{
    pub asr_service: Arc<AsrService<T, S>>,
    pub bridge_info: BridgeInfo,
    pub max_upload_bytes: Option<usize>,
}

impl<T, S> Clone for AppState<T, S>
where
    T: AudioTranscoder,
    S: SpeechToTextService,
{
    fn clone(&self) -> Self {
        Self {
            asr_service: Arc::clone(&self.asr_service),
            bridge_info: self.bridge_info.clone(),
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}
