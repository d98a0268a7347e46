//! Transcription client for Ekko.
//!
//! Defines the [`Transcriber`] seam and the OpenAI Whisper implementation.
//! A transcriber turns one [`AudioUpload`] into a [`Transcript`]; there is no
//! retry, cancellation, or chunk-level interface at this boundary.

mod whisper;

pub use whisper::{is_api_key_configured, WhisperTranscriber};

use crate::error::Result;
use crate::transcript::Transcript;
use async_trait::async_trait;
use std::path::Path;

/// One assembled audio payload, ready to send to a transcription service.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    /// Original filename, used by the service to pick a decoder.
    pub filename: String,
    /// MIME type, when the source knew it.
    pub content_type: Option<String>,
    /// Raw audio bytes in a single supported encoding.
    pub data: Vec<u8>,
}

impl AudioUpload {
    pub fn new(filename: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type: None,
            data,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Trait for transcription services.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe an assembled audio payload.
    async fn transcribe(&self, upload: AudioUpload) -> Result<Transcript>;

    /// Transcribe an audio file from disk.
    async fn transcribe_file(&self, path: &Path) -> Result<Transcript> {
        let data = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio.mp3")
            .to_string();
        self.transcribe(AudioUpload::new(filename, data)).await
    }
}
