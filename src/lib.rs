//! Ekko - Time-Aligned Audio Transcription
//!
//! A CLI tool and HTTP API for transcribing audio and viewing the result as
//! time-binned text synchronized with playback.
//!
//! The name "Ekko" comes from the Norwegian word for "echo."
//!
//! # Overview
//!
//! Ekko allows you to:
//! - Transcribe audio files through the OpenAI Whisper API
//! - Render transcripts as time-binned text with window timestamps
//! - Map any playback position to the active transcript segment
//! - Export transcripts as JSON, SRT, or WebVTT
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `transcript` - Transcript model, display binning, position lookup
//! - `session` - Playback-sync controller and recording chunk buffer
//! - `transcription` - Speech-to-text client
//! - `cli` - Command-line interface and HTTP server
//!
//! # Example
//!
//! ```rust
//! use ekko::session::{Session, SessionEvent};
//! use ekko::transcript::{Segment, Transcript};
//!
//! let transcript = Transcript::from_segments(
//!     "en",
//!     vec![
//!         Segment::new(0, 0.0, 4.5, "Hello."),
//!         Segment::new(1, 4.5, 9.0, "Welcome to Ekko."),
//!     ],
//! );
//!
//! let mut session = Session::with_transcript(transcript);
//! session.handle(SessionEvent::TimeUpdate(5.2));
//! assert_eq!(session.active_segment().unwrap().id, 1);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod openai;
pub mod session;
pub mod transcript;
pub mod transcription;

pub use error::{EkkoError, Result};
