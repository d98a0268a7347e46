//! Playback session: the single-threaded controller behind a transcript view.
//!
//! UI callbacks (playback timer ticks, recorder data, network completions)
//! arrive as typed [`SessionEvent`]s; each is handled to completion before
//! the next, so there is no shared mutable state across execution contexts.
//! The session owns the transcript, the active-segment index, and the
//! in-progress recording.

mod recorder;

pub use recorder::{RecordingSession, CHUNK_INTERVAL};

use crate::transcript::{segment_at, Segment, Transcript};
use crate::transcription::AudioUpload;
use tracing::{debug, warn};

/// A UI-originated event handled by the session.
#[derive(Debug)]
pub enum SessionEvent {
    /// Playback position moved to the given time (seconds).
    TimeUpdate(f64),
    /// The user picked a segment directly (double-click in the original UI).
    SegmentSelected(i64),
    /// A transcription round-trip completed.
    TranscriptReady(Transcript),
    /// The recorder produced another audio chunk.
    ChunkAvailable(Vec<u8>),
    /// The recorder stopped; assemble the buffered chunks.
    RecordingStopped,
}

/// What the caller should do after an event, beyond reading session state.
#[derive(Debug)]
pub enum SessionAction {
    /// Nothing; state may still have changed.
    None,
    /// Move playback to the given time (seconds) and play.
    Seek(f64),
    /// Send the assembled recording for transcription.
    Upload(AudioUpload),
}

/// Owned state for one playback/recording session.
#[derive(Debug, Default)]
pub struct Session {
    transcript: Option<Transcript>,
    /// Index of the active segment, `None` when playback is past the end
    /// or no lookup has happened yet.
    current: Option<usize>,
    recording: Option<RecordingSession>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session around an existing transcript.
    pub fn with_transcript(transcript: Transcript) -> Self {
        Self {
            transcript: Some(transcript),
            current: None,
            recording: None,
        }
    }

    pub fn transcript(&self) -> Option<&Transcript> {
        self.transcript.as_ref()
    }

    /// The segment playback currently sits in, if any.
    pub fn active_segment(&self) -> Option<&Segment> {
        let transcript = self.transcript.as_ref()?;
        self.current.and_then(|i| transcript.segments.get(i))
    }

    pub fn is_recording(&self) -> bool {
        self.recording.is_some()
    }

    /// Begin buffering recorder chunks. A second start while recording is
    /// already underway is ignored.
    pub fn start_recording(&mut self) {
        if self.recording.is_some() {
            warn!("Recording already in progress, ignoring start");
            return;
        }
        self.recording = Some(RecordingSession::start());
    }

    /// Handle one event to completion.
    pub fn handle(&mut self, event: SessionEvent) -> SessionAction {
        match event {
            SessionEvent::TimeUpdate(t) => self.on_time_update(t),
            SessionEvent::SegmentSelected(id) => self.on_select(id),
            SessionEvent::TranscriptReady(transcript) => self.on_transcript(transcript),
            SessionEvent::ChunkAvailable(chunk) => self.on_chunk(chunk),
            SessionEvent::RecordingStopped => self.on_recording_stopped(),
        }
    }

    /// Playback-position update with the cheap stability check: while the
    /// active segment still covers the new time, skip the search entirely.
    fn on_time_update(&mut self, t: f64) -> SessionAction {
        let Some(transcript) = self.transcript.as_ref() else {
            return SessionAction::None;
        };

        if let Some(segment) = self.active_segment() {
            if segment.covers(t) {
                return SessionAction::None;
            }
        }

        let idx = segment_at(&transcript.segments, t);
        self.current = (idx < transcript.segments.len()).then_some(idx);
        SessionAction::None
    }

    /// Direct selection: activate the segment and seek just past its start,
    /// so the next time update lands inside it.
    fn on_select(&mut self, id: i64) -> SessionAction {
        let Some(transcript) = self.transcript.as_ref() else {
            return SessionAction::None;
        };

        match transcript.segments.iter().position(|s| s.id == id) {
            Some(idx) => {
                let start = transcript.segments[idx].start;
                self.current = Some(idx);
                SessionAction::Seek(start + 0.01)
            }
            None => {
                warn!(id, "Selected segment not in transcript");
                SessionAction::None
            }
        }
    }

    /// A transcript arrived. Empty results are dropped so the view never
    /// shows (or indexes into) a transcript with no segments.
    fn on_transcript(&mut self, transcript: Transcript) -> SessionAction {
        if transcript.validate().is_err() {
            warn!("Dropping transcript with no segments");
            return SessionAction::None;
        }

        debug!(
            segments = transcript.segments.len(),
            duration = transcript.duration,
            "Transcript ready"
        );
        self.transcript = Some(transcript);
        self.current = None;
        SessionAction::None
    }

    fn on_chunk(&mut self, chunk: Vec<u8>) -> SessionAction {
        match self.recording.as_mut() {
            Some(recording) => recording.push_chunk(chunk),
            None => warn!("Audio chunk received while not recording, dropped"),
        }
        SessionAction::None
    }

    fn on_recording_stopped(&mut self) -> SessionAction {
        match self.recording.take() {
            Some(recording) => SessionAction::Upload(recording.stop()),
            None => {
                warn!("Recording stop without an active recording");
                SessionAction::None
            }
        }
    }
}
