//! Transcript data model.
//!
//! A [`Transcript`] is the ordered output of one transcription run: a list of
//! timestamped [`Segment`]s plus aggregate metadata. Binning for display and
//! playback-position lookup live in the submodules.

mod bins;
mod format;
mod locate;

pub use bins::{bin_segments, window_for, Bin};
pub use format::{format_transcript, render_binned, OutputFormat};
pub use locate::segment_at;

use crate::error::{EkkoError, Result};
use serde::{Deserialize, Serialize};

/// A single timestamped span of recognized speech.
///
/// Recognizer-specific fields (`seek`, `tokens`, probability scores) are
/// carried through untouched; none of the core logic reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Segment id; unique, ascending in temporal order.
    pub id: i64,
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
    /// Recognized text. May carry surrounding whitespace; trim at render time.
    pub text: String,

    // Opaque recognizer metadata, passed through as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seek: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_logprob: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_speech_prob: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression_ratio: Option<f32>,
}

impl Segment {
    /// Create a segment with no recognizer metadata.
    pub fn new(id: i64, start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            id,
            start,
            end,
            text: text.into(),
            seek: None,
            tokens: None,
            avg_logprob: None,
            temperature: None,
            no_speech_prob: None,
            compression_ratio: None,
        }
    }

    /// Whether playback time `t` falls within `[start, end)`.
    pub fn covers(&self, t: f64) -> bool {
        self.start <= t && t < self.end
    }
}

/// A complete transcript with segments and aggregate metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    /// Total duration in seconds.
    pub duration: f64,
    /// Detected or requested language.
    pub language: String,
    /// Full transcript text.
    pub text: String,
    /// Individual segments, ascending by start and by end.
    pub segments: Vec<Segment>,
}

impl Transcript {
    /// Build a transcript from segments, deriving text and duration.
    pub fn from_segments(language: impl Into<String>, segments: Vec<Segment>) -> Self {
        let text = segments
            .iter()
            .map(|s| s.text.trim())
            .collect::<Vec<_>>()
            .join(" ");
        let duration = segments.last().map(|s| s.end).unwrap_or(0.0);

        Self {
            duration,
            language: language.into(),
            text,
            segments,
        }
    }

    /// Reject transcripts that cannot be rendered or synced.
    ///
    /// Every rendering and sync entry point calls this instead of indexing
    /// into a possibly-empty segment list.
    pub fn validate(&self) -> Result<()> {
        if self.segments.is_empty() {
            return Err(EkkoError::EmptyTranscript);
        }
        Ok(())
    }
}

/// Format seconds as MM:SS or HH:MM:SS.
pub fn format_timestamp(seconds: f64) -> String {
    let total_seconds = seconds as u32;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_segments() {
        let segments = vec![
            Segment::new(0, 0.0, 5.0, " Hello world"),
            Segment::new(1, 5.0, 10.0, " This is a test"),
        ];

        let transcript = Transcript::from_segments("en", segments);

        assert_eq!(transcript.text, "Hello world This is a test");
        assert_eq!(transcript.duration, 10.0);
        assert!(transcript.validate().is_ok());
    }

    #[test]
    fn test_empty_transcript_rejected() {
        let transcript = Transcript::from_segments("en", vec![]);
        assert!(matches!(
            transcript.validate(),
            Err(EkkoError::EmptyTranscript)
        ));
    }

    #[test]
    fn test_covers_half_open() {
        let segment = Segment::new(0, 2.0, 4.0, "x");
        assert!(segment.covers(2.0));
        assert!(segment.covers(3.99));
        assert!(!segment.covers(4.0));
        assert!(!segment.covers(1.99));
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0.0), "00:00");
        assert_eq!(format_timestamp(65.0), "01:05");
        assert_eq!(format_timestamp(3665.0), "01:01:05");
    }

    #[test]
    fn test_metadata_roundtrip() {
        let json = r#"{
            "duration": 5.0,
            "language": "en",
            "text": "hi",
            "segments": [{
                "id": 0, "start": 0.0, "end": 5.0, "text": " hi",
                "seek": 0, "tokens": [50364, 1841],
                "avg_logprob": -0.3, "temperature": 0.0,
                "no_speech_prob": 0.02, "compression_ratio": 1.1
            }]
        }"#;

        let transcript: Transcript = serde_json::from_str(json).unwrap();
        let segment = &transcript.segments[0];
        assert_eq!(segment.tokens.as_deref(), Some(&[50364, 1841][..]));
        assert_eq!(segment.seek, Some(0));

        // Metadata survives re-serialization untouched.
        let out = serde_json::to_value(&transcript).unwrap();
        let prob = out["segments"][0]["no_speech_prob"].as_f64().unwrap();
        assert!((prob - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_metadata_optional() {
        let json = r#"{"id": 3, "start": 1.0, "end": 2.0, "text": "ok"}"#;
        let segment: Segment = serde_json::from_str(json).unwrap();
        assert!(segment.tokens.is_none());

        let out = serde_json::to_string(&segment).unwrap();
        assert!(!out.contains("tokens"));
    }
}
