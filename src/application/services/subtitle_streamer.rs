use std::fmt;

use futures::StreamExt;
use futures::stream;

use crate::application::ports::{RemoteServiceError, SubtitleStream};

/// What the remote service handed back for a request.
pub enum SubtitleOutcome {
    /// Non-empty body, replayed from its first chunk.
    Stream(SubtitleStream),
    /// The remote call succeeded without producing any bytes.
    Empty,
}

impl fmt::Debug for SubtitleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubtitleOutcome::Stream(_) => f.write_str("SubtitleOutcome::Stream(..)"),
            SubtitleOutcome::Empty => f.write_str("SubtitleOutcome::Empty"),
        }
    }
}

/// Waits for the first non-empty chunk of `body` and re-attaches it in front
/// of the remainder. Nothing past that chunk is buffered.
pub async fn prepare_subtitle_stream(
    mut body: SubtitleStream,
) -> Result<SubtitleOutcome, RemoteServiceError> {
    while let Some(chunk) = body.next().await {
        let chunk = chunk?;
        if chunk.is_empty() {
            continue;
        }

        let head = stream::once(async move { Ok(chunk) });
        return Ok(SubtitleOutcome::Stream(Box::pin(head.chain(body))));
    }

    Ok(SubtitleOutcome::Empty)
}
