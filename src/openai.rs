//! OpenAI client construction.

use async_openai::{config::OpenAIConfig, Client};
use std::time::Duration;

/// Create an OpenAI client with a request timeout on the underlying HTTP
/// client.
///
/// The timeout comes from `transcription.timeout_seconds` in the settings;
/// Whisper uploads can be tens of megabytes, so the limit has to cover the
/// slowest expected round-trip while still bounding a stalled request.
pub fn create_client(timeout: Duration) -> Client<OpenAIConfig> {
    let http_client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("Failed to create HTTP client");

    Client::with_config(OpenAIConfig::default()).with_http_client(http_client)
}
