//! OpenAI Whisper transcription implementation.

use super::{AudioUpload, Transcriber};
use crate::error::{EkkoError, Result};
use crate::openai::create_client;
use crate::transcript::{Segment, Transcript};
use async_openai::types::{AudioResponseFormat, CreateTranscriptionRequestArgs};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// OpenAI Whisper-based transcriber.
pub struct WhisperTranscriber {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    language: Option<String>,
}

impl WhisperTranscriber {
    /// Create a Whisper transcriber for the given model, language hint, and
    /// request timeout (see `TranscriptionSettings`).
    pub fn with_config(
        model: &str,
        language: Option<&str>,
        timeout: std::time::Duration,
    ) -> Result<Self> {
        Ok(Self {
            client: create_client(timeout),
            model: model.to_string(),
            language: language.map(|s| s.to_string()),
        })
    }

    /// Map one verbose-json segment, keeping recognizer metadata intact.
    fn map_segment(s: &async_openai::types::TranscriptionSegment) -> Segment {
        Segment {
            id: s.id as i64,
            start: s.start as f64,
            end: s.end as f64,
            text: s.text.clone(),
            seek: Some(s.seek as i64),
            tokens: Some(s.tokens.iter().map(|&t| t as u32).collect()),
            avg_logprob: Some(s.avg_logprob),
            temperature: Some(s.temperature),
            no_speech_prob: Some(s.no_speech_prob),
            compression_ratio: Some(s.compression_ratio),
        }
    }
}

#[async_trait]
impl Transcriber for WhisperTranscriber {
    #[instrument(skip(self, upload), fields(filename = %upload.filename, bytes = upload.data.len()))]
    async fn transcribe(&self, upload: AudioUpload) -> Result<Transcript> {
        debug!("Uploading audio for transcription");

        let mut request_builder = CreateTranscriptionRequestArgs::default();
        request_builder
            .file(async_openai::types::AudioInput::from_vec_u8(
                upload.filename.clone(),
                upload.data,
            ))
            .model(&self.model)
            .response_format(AudioResponseFormat::VerboseJson);

        if let Some(lang) = &self.language {
            request_builder.language(lang);
        }

        let request = request_builder
            .build()
            .map_err(|e| EkkoError::Transcription(format!("Failed to build request: {}", e)))?;

        let response = self
            .client
            .audio()
            .transcribe_verbose_json(request)
            .await
            .map_err(|e| EkkoError::OpenAI(format!("Whisper API error: {}", e)))?;

        let duration = response.duration as f64;
        let segments: Vec<Segment> = match &response.segments {
            Some(segs) => segs.iter().map(Self::map_segment).collect(),
            None => {
                // Fallback: one segment spanning the full duration.
                warn!("No segment-level output returned, using full text");
                vec![Segment::new(0, 0.0, duration, response.text.clone())]
            }
        };

        debug!("Transcribed {} segments", segments.len());

        Ok(Transcript {
            duration,
            language: response.language,
            text: response.text,
            segments,
        })
    }
}

/// Check if the OpenAI API key is configured.
pub fn is_api_key_configured() -> bool {
    std::env::var("OPENAI_API_KEY").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_check() {
        // This just tests that the function works
        let _ = is_api_key_configured();
    }

    #[test]
    fn test_with_config_builds_client() {
        let settings = crate::config::TranscriptionSettings::default();
        let transcriber =
            WhisperTranscriber::with_config(&settings.model, Some("en"), settings.timeout());
        assert!(transcriber.is_ok());
    }
}
