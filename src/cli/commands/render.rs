//! Render command - print a saved transcript as time-binned text.

use crate::cli::Output;
use crate::session::{Session, SessionEvent};
use crate::transcript::{bin_segments, format_timestamp, render_binned, Transcript};
use anyhow::Result;
use console::style;

/// Run the render command.
///
/// Without `--at`, prints the plain binned view. With `--at <seconds>`, runs
/// the playback-sync path and highlights the active segment; a position past
/// the final segment highlights nothing.
pub fn run_render(input: &str, at: Option<f64>) -> Result<()> {
    let content = std::fs::read_to_string(input)?;
    let transcript: Transcript = serde_json::from_str(&content)?;

    if let Err(e) = transcript.validate() {
        Output::error(&format!("Cannot render {}: {}", input, e));
        return Err(e.into());
    }

    match at {
        None => print!("{}", render_binned(&transcript)?),
        Some(t) => {
            let mut session = Session::with_transcript(transcript);
            session.handle(SessionEvent::TimeUpdate(t));
            let active_id = session.active_segment().map(|s| s.id);

            // Session owns the transcript now; render from its view.
            if let Some(transcript) = session.transcript() {
                print_highlighted(transcript, active_id);
            }
        }
    }

    Ok(())
}

fn print_highlighted(transcript: &Transcript, active_id: Option<i64>) {
    for bin in bin_segments(&transcript.segments) {
        let mut parts = Vec::with_capacity(bin.segments.len());
        for segment in bin.segments {
            let text = segment.text.trim();
            if Some(segment.id) == active_id {
                parts.push(style(text).reverse().to_string());
            } else {
                parts.push(text.to_string());
            }
        }
        println!(
            "{}  {}",
            style(format_timestamp(bin.start)).dim(),
            parts.join(" ")
        );
    }
}
