//! Audio framing.
//!
//! The remote speech engine expects audio at something close to a real-time
//! cadence, so file contents are not sent as one burst: they are cut into
//! fixed-size chunks emitted on a fixed interval. A trailing buffer of
//! silence marks the end of the utterance so the service finalizes the
//! recognition.

use std::path::Path;

use futures::{Sink, SinkExt, Stream, StreamExt};
use tokio_tungstenite::tungstenite::protocol::Message;

use crate::error::{Error, Result};

/// Bytes per outbound chunk.
pub const CHUNK_SIZE: usize = 32_000;

/// Interval between chunk emissions.
pub const CHUNK_INTERVAL: std::time::Duration = std::time::Duration::from_millis(100);

/// Zero bytes appended after file contents as the end-of-utterance marker.
pub const TRAILING_SILENCE_BYTES: usize = 160_000;

type WsError = tokio_tungstenite::tungstenite::Error;

/// Read an audio file and append the trailing silence marker.
///
/// The path is checked before any read, so a bad path fails without touching
/// the connection.
///
/// # Errors
/// Returns [`Error::FileNotFound`] if the path is inaccessible, or an IO
/// error if the read itself fails.
pub async fn load_padded(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();

    if tokio::fs::metadata(path).await.is_err() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let mut audio = tokio::fs::read(path).await?;
    audio.resize(audio.len() + TRAILING_SILENCE_BYTES, 0);
    Ok(audio)
}

/// Push audio into a binary-frame sink as paced fixed-size chunks.
///
/// Emits one chunk of at most [`CHUNK_SIZE`] bytes per [`CHUNK_INTERVAL`]
/// tick until the buffer is drained.
///
/// # Errors
/// Returns an error if a send fails.
pub async fn pump<S>(sink: &mut S, audio: &[u8]) -> Result<()>
where
    S: Sink<Message, Error = WsError> + Unpin,
{
    let mut ticker = tokio::time::interval(CHUNK_INTERVAL);
    for chunk in audio.chunks(CHUNK_SIZE) {
        ticker.tick().await;
        sink.send(Message::Binary(chunk.to_vec().into())).await?;
    }
    tracing::debug!(bytes = audio.len(), "finished sending audio buffer");
    Ok(())
}

/// Forward chunks from an arbitrary byte stream as they arrive, unpaced.
///
/// Completes when the input stream ends.
///
/// # Errors
/// Returns an error if a send fails.
pub async fn forward<S, I>(sink: &mut S, mut input: I) -> Result<()>
where
    S: Sink<Message, Error = WsError> + Unpin,
    I: Stream<Item = Vec<u8>> + Unpin,
{
    while let Some(chunk) = input.next().await {
        sink.send(Message::Binary(chunk.into())).await?;
    }
    tracing::debug!("input stream ended");
    Ok(())
}
