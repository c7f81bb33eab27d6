use crate::transport::ws::WsStream;
use futures::stream::ReuniteError;
use std::path::PathBuf;
use thiserror::Error;
use tokio_tungstenite::tungstenite::protocol::Message;

#[derive(Error, Debug)]
pub enum Error {
    /// The session configuration cannot support a connection attempt.
    /// Checked before any network call is made.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The token issuance endpoint rejected or failed the request.
    #[error("token request failed: {0}")]
    Auth(#[source] reqwest::Error),

    /// The WebSocket connect attempt failed. Single attempt, no retry.
    #[error("connection to translation endpoint failed: {0}")]
    Connection(#[source] tokio_tungstenite::tungstenite::Error),

    #[error("could not find file {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("{0} timed out")]
    Timeout(&'static str),

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Header error: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    #[error("The connection was closed unexpectedly")]
    ConnectionClosed,

    #[error("Failed to reunite split client: {0}")]
    Reunite(#[from] ReuniteError<WsStream, Message>),
}

pub type Result<T> = std::result::Result<T, Error>;
