use std::time::{Duration, Instant};

/// Wall-clock timer for one bridge request.
#[derive(Debug, Clone, Copy)]
pub struct RequestTimer {
    started: Instant,
}

impl RequestTimer {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn completion_message(&self, video_file: Option<&str>) -> String {
        completion_message(self.elapsed(), video_file)
    }
}

pub fn completion_message(elapsed: Duration, video_file: Option<&str>) -> String {
    let total_secs = elapsed.as_secs();
    let (minutes, seconds) = (total_secs / 60, total_secs % 60);

    match video_file.filter(|name| !name.is_empty()) {
        Some(name) => format!(
            "Transcription of '{}' from Bazarr complete, it took {} minutes and {} seconds to complete.",
            name, minutes, seconds
        ),
        None => format!(
            "Transcription complete, it took {} minutes and {} seconds to complete.",
            minutes, seconds
        ),
    }
}
