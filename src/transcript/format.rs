//! Transcript output formatting (JSON, SRT, VTT, binned text).

use super::{bin_segments, format_timestamp, Transcript};
use crate::error::Result;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Json,
    Srt,
    Vtt,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "srt" => Ok(OutputFormat::Srt),
            "vtt" | "webvtt" => Ok(OutputFormat::Vtt),
            _ => Err(format!("Unknown format: {}. Use json, srt, or vtt.", s)),
        }
    }
}

/// Format a transcript for output.
pub fn format_transcript(transcript: &Transcript, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(transcript).unwrap_or_else(|_| "{}".to_string())
        }
        OutputFormat::Srt => format_srt(transcript),
        OutputFormat::Vtt => format_vtt(transcript),
    }
}

/// Render the time-binned view as plain text: one window timestamp per bin,
/// trimmed segment texts joined with single spaces.
///
/// Rejects empty transcripts rather than rendering nothing.
pub fn render_binned(transcript: &Transcript) -> Result<String> {
    transcript.validate()?;

    let mut out = String::new();
    for bin in bin_segments(&transcript.segments) {
        out.push_str(&format_timestamp(bin.start));
        out.push_str("  ");
        let line = bin
            .segments
            .iter()
            .map(|s| s.text.trim())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

/// Format as SRT (SubRip).
fn format_srt(transcript: &Transcript) -> String {
    let mut output = String::new();

    for (i, segment) in transcript.segments.iter().enumerate() {
        output.push_str(&format!("{}\n", i + 1));
        output.push_str(&format!(
            "{} --> {}\n",
            format_srt_timestamp(segment.start),
            format_srt_timestamp(segment.end)
        ));
        output.push_str(segment.text.trim());
        output.push_str("\n\n");
    }

    output
}

/// Format as WebVTT.
fn format_vtt(transcript: &Transcript) -> String {
    let mut output = String::from("WEBVTT\n\n");

    for (i, segment) in transcript.segments.iter().enumerate() {
        output.push_str(&format!("{}\n", i + 1));
        output.push_str(&format!(
            "{} --> {}\n",
            format_vtt_timestamp(segment.start),
            format_vtt_timestamp(segment.end)
        ));
        output.push_str(segment.text.trim());
        output.push_str("\n\n");
    }

    output
}

/// Timestamp as `00:00:00,000` (SRT uses a comma separator).
fn format_srt_timestamp(seconds: f64) -> String {
    let millis = (seconds * 1000.0).round() as u64;
    format!(
        "{:02}:{:02}:{:02},{:03}",
        millis / 3_600_000,
        (millis % 3_600_000) / 60_000,
        (millis % 60_000) / 1000,
        millis % 1000
    )
}

/// Timestamp as `00:00:00.000` (WebVTT uses a period separator).
fn format_vtt_timestamp(seconds: f64) -> String {
    let millis = (seconds * 1000.0).round() as u64;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        millis / 3_600_000,
        (millis % 3_600_000) / 60_000,
        (millis % 60_000) / 1000,
        millis % 1000
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::Segment;

    fn sample() -> Transcript {
        Transcript::from_segments(
            "en",
            vec![
                Segment::new(0, 0.0, 5.5, " Hello there."),
                Segment::new(1, 5.5, 11.0, " General Kenobi."),
            ],
        )
    }

    #[test]
    fn test_srt_output() {
        let srt = format_transcript(&sample(), OutputFormat::Srt);
        assert!(srt.starts_with("1\n00:00:00,000 --> 00:00:05,500\nHello there.\n"));
        assert!(srt.contains("2\n00:00:05,500 --> 00:00:11,000\nGeneral Kenobi.\n"));
    }

    #[test]
    fn test_vtt_output() {
        let vtt = format_transcript(&sample(), OutputFormat::Vtt);
        assert!(vtt.starts_with("WEBVTT\n\n"));
        assert!(vtt.contains("00:00:00.000 --> 00:00:05.500"));
    }

    #[test]
    fn test_json_output_is_api_shape() {
        let json = format_transcript(&sample(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["segments"][0]["start"], 0.0);
        assert_eq!(value["language"], "en");
    }

    #[test]
    fn test_render_binned() {
        // T = 11 -> window 15; everything in one bin at 00:00.
        let out = render_binned(&sample()).unwrap();
        assert_eq!(out, "00:00  Hello there. General Kenobi.\n");
    }

    #[test]
    fn test_render_binned_multiple_windows() {
        let transcript = Transcript::from_segments(
            "en",
            vec![
                Segment::new(0, 0.0, 10.0, "first"),
                Segment::new(1, 40.0, 100.0, "second"),
            ],
        );
        let out = render_binned(&transcript).unwrap();
        assert_eq!(out, "00:00  first\n00:30  second\n");
    }

    #[test]
    fn test_render_binned_rejects_empty() {
        let transcript = Transcript::from_segments("en", vec![]);
        assert!(render_binned(&transcript).is_err());
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("webvtt".parse::<OutputFormat>().unwrap(), OutputFormat::Vtt);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
