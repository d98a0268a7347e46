//! CLI module for Ekko.

pub mod commands;
mod output;

pub use output::{format_duration, Output};

use clap::{Parser, Subcommand};

/// Ekko - time-aligned audio transcription
///
/// Transcribe audio through the Whisper API and view the result as
/// time-binned text synced to playback position.
#[derive(Parser, Debug)]
#[command(name = "ekko")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transcribe an audio file
    Transcribe {
        /// Path to the audio file
        input: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format (json, srt, vtt)
        #[arg(long, default_value = "json")]
        format: String,

        /// Language hint for the recognizer (e.g. "en", "no")
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Render a saved transcript as time-binned text
    Render {
        /// Path to a transcript JSON file
        input: String,

        /// Playback position in seconds; highlights the active segment
        #[arg(long)]
        at: Option<f64>,
    },

    /// Start the HTTP transcription API
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check system requirements and configuration
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
