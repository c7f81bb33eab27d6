#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]

//! Client for the Microsoft Translator streaming speech translation API.
//!
//! The crate is a thin adapter over the vendor endpoint: it exchanges a
//! subscription key for a bearer token, opens an authenticated WebSocket,
//! frames audio onto it, and relays translation results back. See
//! [`Translator`] for the session lifecycle and [`TranslatorClient`] for the
//! live connection.

pub mod audio;
pub mod config;
pub mod error;
pub mod protocol;
pub mod session;
pub mod transport;

pub use config::{ProfanityAction, ProfanityMarker, SpeechConfig, SpeechConfigBuilder};
pub use error::{Error, Result};
pub use protocol::{ResultKind, TranslationMessage, TranslationResult};
pub use session::Translator;

use std::path::Path;

use futures::stream::BoxStream;
use futures::{SinkExt, Stream, StreamExt};
use tokio_tungstenite::tungstenite::protocol::Message;
use transport::ws::WsStream;

const TRACE_LOG_MAX_BYTES: usize = 1024;

/// The live connection to the translation endpoint.
///
/// Owned by a [`Translator`] after a successful start, or used standalone via
/// [`TranslatorClient::connect`]. `Send` but not `Sync` because the
/// underlying WebSocket stream is not `Sync`.
#[must_use]
#[derive(Debug)]
pub struct TranslatorClient {
    stream: WsStream,
}

impl TranslatorClient {
    /// Open an authenticated connection for the given configuration.
    ///
    /// # Errors
    /// Returns an error if the WebSocket handshake fails or times out.
    pub async fn connect(config: &SpeechConfig, access_token: &str) -> Result<Self> {
        let stream = transport::ws::connect(
            config.endpoint_url(),
            access_token,
            config.client_trace_id(),
        )
        .await?;
        Ok(Self { stream })
    }

    /// Send one chunk of raw audio as a binary frame.
    ///
    /// # Errors
    /// Returns an error if the WebSocket send fails.
    pub async fn send_audio(&mut self, chunk: Vec<u8>) -> Result<()> {
        self.stream.send(Message::Binary(chunk.into())).await?;
        Ok(())
    }

    /// Send an audio file, paced as fixed-size chunks with a trailing
    /// silence marker. Completes when the whole buffer has been emitted.
    ///
    /// # Errors
    /// Returns [`Error::FileNotFound`] if the path is inaccessible (checked
    /// before anything is sent), or an error if a send fails.
    pub async fn send_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let buffer = audio::load_padded(path).await?;
        audio::pump(&mut self.stream, &buffer).await
    }

    /// Forward chunks from an arbitrary byte stream as they arrive.
    /// Completes when the input stream ends.
    ///
    /// # Errors
    /// Returns an error if a send fails.
    pub async fn send_stream<I>(&mut self, input: I) -> Result<()>
    where
        I: Stream<Item = Vec<u8>> + Unpin,
    {
        audio::forward(&mut self.stream, input).await
    }

    /// Receive the next inbound message, answering pings along the way.
    ///
    /// Returns `Ok(None)` once the server closes the connection.
    ///
    /// # Errors
    /// Returns an error if the WebSocket fails.
    pub async fn next_message(&mut self) -> Result<Option<TranslationMessage>> {
        while let Some(msg) = self.stream.next().await {
            match msg? {
                Message::Text(text) => {
                    tracing::trace!(
                        "received result frame: {}",
                        preview(&text, TRACE_LOG_MAX_BYTES)
                    );
                    return Ok(Some(TranslationMessage::Text(text.to_string())));
                }
                Message::Binary(data) => {
                    tracing::trace!(bytes = data.len(), "received audio frame");
                    return Ok(Some(TranslationMessage::Audio(data.to_vec())));
                }
                Message::Close(_) => {
                    tracing::info!("connection closed by server");
                    return Ok(None);
                }
                Message::Ping(payload) => {
                    self.stream.send(Message::Pong(payload)).await?;
                }
                _ => (),
            }
        }
        Ok(None)
    }

    /// Request a graceful close and wait for the acknowledgment.
    ///
    /// # Errors
    /// Returns an error if sending the close frame fails.
    pub async fn close(mut self) -> Result<()> {
        self.stream.send(Message::Close(None)).await?;

        // Drain until the peer acknowledges; late errors here mean the
        // connection is already gone, which is the outcome we wanted.
        while let Some(msg) = self.stream.next().await {
            match msg {
                Ok(Message::Close(_)) | Err(_) => break,
                _ => (),
            }
        }

        tracing::info!("closed translation endpoint connection");
        Ok(())
    }

    /// Split the connection so audio can be pushed while results arrive.
    pub fn split(self) -> (TranslationSender, TranslationReceiver) {
        let (write, read) = self.stream.split();
        (TranslationSender { write }, TranslationReceiver { read })
    }

    /// Re-unify a split connection.
    ///
    /// # Errors
    /// Returns an error if the halves do not come from the same connection.
    pub fn unsplit(sender: TranslationSender, receiver: TranslationReceiver) -> Result<Self> {
        let stream = receiver.read.reunite(sender.write)?;
        Ok(Self { stream })
    }
}

fn preview(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// The sending half of a split [`TranslatorClient`].
#[must_use]
pub struct TranslationSender {
    write: futures::stream::SplitSink<WsStream, Message>,
}

impl TranslationSender {
    /// Send one chunk of raw audio as a binary frame.
    ///
    /// # Errors
    /// Returns an error if the WebSocket send fails.
    pub async fn send_audio(&mut self, chunk: Vec<u8>) -> Result<()> {
        self.write.send(Message::Binary(chunk.into())).await?;
        Ok(())
    }

    /// Send an audio file, paced as fixed-size chunks with a trailing
    /// silence marker.
    ///
    /// # Errors
    /// Returns [`Error::FileNotFound`] if the path is inaccessible, or an
    /// error if a send fails.
    pub async fn send_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let buffer = audio::load_padded(path).await?;
        audio::pump(&mut self.write, &buffer).await
    }

    /// Forward chunks from an arbitrary byte stream as they arrive.
    ///
    /// # Errors
    /// Returns an error if a send fails.
    pub async fn send_stream<I>(&mut self, input: I) -> Result<()>
    where
        I: Stream<Item = Vec<u8>> + Unpin,
    {
        audio::forward(&mut self.write, input).await
    }
}

/// The receiving half of a split [`TranslatorClient`].
#[must_use]
pub struct TranslationReceiver {
    read: futures::stream::SplitStream<WsStream>,
}

impl TranslationReceiver {
    /// Receive the next inbound message.
    ///
    /// Returns `Ok(None)` once the server closes the connection.
    ///
    /// # Errors
    /// Returns an error if the WebSocket fails.
    pub async fn next_message(&mut self) -> Result<Option<TranslationMessage>> {
        while let Some(msg) = self.read.next().await {
            match msg? {
                Message::Text(text) => {
                    return Ok(Some(TranslationMessage::Text(text.to_string())));
                }
                Message::Binary(data) => {
                    return Ok(Some(TranslationMessage::Audio(data.to_vec())));
                }
                Message::Close(_) => return Ok(None),
                _ => (),
            }
        }
        Ok(None)
    }

    /// Expose inbound messages as a stream that preserves errors.
    #[must_use]
    pub fn try_into_stream(self) -> BoxStream<'static, Result<TranslationMessage>> {
        self.read
            .map(|res| res.map_err(Error::from))
            .filter_map(|res| async move {
                match res {
                    Ok(Message::Text(text)) => {
                        Some(Ok(TranslationMessage::Text(text.to_string())))
                    }
                    Ok(Message::Binary(data)) => {
                        Some(Ok(TranslationMessage::Audio(data.to_vec())))
                    }
                    Ok(_) => None,
                    Err(e) => Some(Err(e)),
                }
            })
            .boxed()
    }
}
