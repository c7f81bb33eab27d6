//! Inbound message types.
//!
//! The service interleaves two kinds of frames on the live connection: UTF-8
//! text frames carrying JSON recognition/translation events, and binary
//! frames carrying synthesized audio when the text-to-speech feature is
//! enabled.

use serde::Deserialize;

use crate::error::Result;

/// One inbound frame from the live connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationMessage {
    /// A JSON-encoded recognition/translation event.
    Text(String),
    /// Synthesized audio bytes.
    Audio(Vec<u8>),
}

impl TranslationMessage {
    /// Parse a text frame into a typed [`TranslationResult`].
    ///
    /// Returns `None` for audio frames.
    ///
    /// # Errors
    /// Returns an error if the frame is text but not a valid result payload.
    pub fn result(&self) -> Option<Result<TranslationResult>> {
        match self {
            Self::Text(json) => Some(serde_json::from_str(json).map_err(Into::into)),
            Self::Audio(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    /// Interim hypothesis; sent when the `partial` feature is enabled.
    Partial,
    /// End-of-utterance result.
    Final,
    #[serde(other)]
    Unknown,
}

/// A recognition/translation event as delivered by the service.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TranslationResult {
    #[serde(rename = "type")]
    pub kind: ResultKind,
    pub id: Option<String>,
    /// What the speech engine heard, in the source language.
    pub recognition: String,
    /// The recognition translated into the target language.
    pub translation: String,
    /// Offset of the recognized audio within the stream, in 100ns ticks.
    /// Present when the `timinginfo` feature is enabled.
    #[serde(rename = "audioTimeOffset")]
    pub audio_time_offset: Option<u64>,
    /// Duration of the recognized audio, in 100ns ticks.
    #[serde(rename = "audioTimeSize")]
    pub audio_time_size: Option<u64>,
    #[serde(rename = "audioStreamPosition")]
    pub audio_stream_position: Option<u64>,
    #[serde(rename = "audioSizeBytes")]
    pub audio_size_bytes: Option<u64>,
}
