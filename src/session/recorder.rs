//! Recording chunk buffer.
//!
//! The recorder collaborator (browser media capture or equivalent) delivers
//! audio chunks on a periodic timer; this buffer keeps them append-only and
//! in arrival order until a stop assembles them into one payload.

use crate::transcription::AudioUpload;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// Cadence at which recorders are expected to emit chunks.
pub const CHUNK_INTERVAL: Duration = Duration::from_secs(5);

/// Container MIME type for assembled recordings.
const RECORDING_MIME: &str = "audio/webm";

/// One in-progress recording: ordered chunks plus session metadata.
#[derive(Debug)]
pub struct RecordingSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    chunks: Vec<Vec<u8>>,
}

impl RecordingSession {
    /// Begin a new, empty recording.
    pub fn start() -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            chunks: Vec::new(),
        };
        debug!(id = %session.id, "Recording started");
        session
    }

    /// Append one chunk. Zero-length chunks are skipped; everything else is
    /// kept in arrival order, never dropped or reordered.
    pub fn push_chunk(&mut self, chunk: Vec<u8>) {
        if chunk.is_empty() {
            return;
        }
        self.chunks.push(chunk);
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Concatenate all buffered chunks into one byte blob.
    ///
    /// Usable mid-recording; the original UI re-uploaded the growing blob on
    /// every chunk, and this is the hook for that behavior.
    pub fn assembled(&self) -> Vec<u8> {
        let total: usize = self.chunks.iter().map(Vec::len).sum();
        let mut blob = Vec::with_capacity(total);
        for chunk in &self.chunks {
            blob.extend_from_slice(chunk);
        }
        blob
    }

    /// Final assembly: consume the recording and produce the upload payload.
    pub fn stop(self) -> AudioUpload {
        debug!(
            id = %self.id,
            started_at = %self.started_at,
            chunks = self.chunks.len(),
            "Recording stopped, assembling"
        );
        AudioUpload::new("recording.webm", self.assembled()).with_content_type(RECORDING_MIME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunks_kept_in_order() {
        let mut recording = RecordingSession::start();
        recording.push_chunk(vec![1, 2]);
        recording.push_chunk(vec![3]);
        recording.push_chunk(vec![4, 5, 6]);

        assert_eq!(recording.chunk_count(), 3);
        assert_eq!(recording.assembled(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_empty_chunks_skipped() {
        let mut recording = RecordingSession::start();
        recording.push_chunk(vec![]);
        recording.push_chunk(vec![7]);
        recording.push_chunk(vec![]);

        assert_eq!(recording.chunk_count(), 1);
    }

    #[test]
    fn test_assembled_is_usable_mid_recording() {
        let mut recording = RecordingSession::start();
        recording.push_chunk(vec![1]);
        assert_eq!(recording.assembled(), vec![1]);

        recording.push_chunk(vec![2]);
        assert_eq!(recording.assembled(), vec![1, 2]);
    }

    #[test]
    fn test_stop_produces_webm_upload() {
        let mut recording = RecordingSession::start();
        recording.push_chunk(vec![9, 9]);

        let upload = recording.stop();
        assert_eq!(upload.filename, "recording.webm");
        assert_eq!(upload.content_type.as_deref(), Some("audio/webm"));
        assert_eq!(upload.data, vec![9, 9]);
    }

    #[test]
    fn test_chunk_interval_is_five_seconds() {
        assert_eq!(CHUNK_INTERVAL, Duration::from_secs(5));
    }
}
