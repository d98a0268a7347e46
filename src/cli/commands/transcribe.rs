//! Transcribe command implementation.

use crate::cli::{format_duration, Output};
use crate::config::Settings;
use crate::transcript::{format_transcript, OutputFormat};
use crate::transcription::{is_api_key_configured, Transcriber, WhisperTranscriber};
use crate::EkkoError;
use anyhow::Result;
use std::path::Path;

/// Run the transcribe command.
pub async fn run_transcribe(
    input: &str,
    output: Option<String>,
    format: &str,
    language: Option<&str>,
    settings: Settings,
) -> Result<()> {
    if !is_api_key_configured() {
        Output::error("OPENAI_API_KEY is not set.");
        Output::info("Run 'ekko doctor' for detailed diagnostics.");
        return Err(anyhow::anyhow!("Missing API key"));
    }

    let format: OutputFormat = format
        .parse()
        .map_err(|e: String| EkkoError::InvalidInput(e))?;

    let path = Path::new(input);
    if !path.is_file() {
        Output::error(&format!("File not found: {}", input));
        return Err(EkkoError::InvalidInput(format!("file not found: {}", input)).into());
    }

    let language = language.or(settings.transcription.language.as_deref());
    let transcriber = WhisperTranscriber::with_config(
        &settings.transcription.model,
        language,
        settings.transcription.timeout(),
    )?;

    let spinner = Output::spinner(&format!("Transcribing {}...", input));
    let result = transcriber.transcribe_file(path).await;
    spinner.finish_and_clear();

    let transcript = match result {
        Ok(t) => t,
        Err(e) => {
            Output::error(&format!("Transcription failed: {}", e));
            return Err(e.into());
        }
    };

    Output::success(&format!(
        "Transcribed {} ({} segments, {})",
        input,
        transcript.segments.len(),
        format_duration(transcript.duration)
    ));

    let formatted = format_transcript(&transcript, format);
    match output {
        Some(output_path) => {
            std::fs::write(&output_path, formatted)?;
            Output::success(&format!("Wrote transcript to {}", output_path));
        }
        None => println!("{}", formatted),
    }

    Ok(())
}
