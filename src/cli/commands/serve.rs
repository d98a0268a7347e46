//! HTTP API server: stateless transcription passthrough.
//!
//! Accepts a multipart audio upload, forwards it to the transcription
//! service, and returns the transcript JSON. Nothing is persisted.

use crate::cli::Output;
use crate::config::Settings;
use crate::transcript::Transcript;
use crate::transcription::{AudioUpload, Transcriber, WhisperTranscriber};
use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, error};

/// Shared application state.
struct AppState {
    transcriber: WhisperTranscriber,
}

/// Run the HTTP API server.
pub async fn run_serve(
    host: Option<&str>,
    port: Option<u16>,
    settings: Settings,
) -> anyhow::Result<()> {
    let host = host.unwrap_or(settings.server.host.as_str()).to_string();
    let port = port.unwrap_or(settings.server.port);

    let transcriber = WhisperTranscriber::with_config(
        &settings.transcription.model,
        settings.transcription.language.as_deref(),
        settings.transcription.timeout(),
    )?;
    let state = Arc::new(AppState { transcriber });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/transcribe", post(transcribe))
        .layer(DefaultBodyLimit::max(settings.server.max_upload_bytes))
        .layer(cors)
        .with_state(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("Ekko API Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET  /health");
    Output::kv("Transcribe", "POST /transcribe (multipart, field 'file')");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}

// === Response Types ===

/// Success envelope: the transcript under a `results` key.
#[derive(Serialize)]
struct TranscribeResponse {
    results: Transcript,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

// === Handlers ===

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn transcribe(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let upload = match read_upload(&mut multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "no file found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("invalid upload: {}", e),
                }),
            )
                .into_response()
        }
    };

    debug!(
        filename = %upload.filename,
        content_type = ?upload.content_type,
        bytes = upload.data.len(),
        "Received audio upload"
    );

    match state.transcriber.transcribe(upload).await {
        Ok(results) => Json(TranscribeResponse { results }).into_response(),
        Err(e) => {
            error!("Transcription failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Pull the `file` field out of the multipart form, if present.
async fn read_upload(multipart: &mut Multipart) -> Result<Option<AudioUpload>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("audio.webm").to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?.to_vec();

        let mut upload = AudioUpload::new(filename, data);
        if let Some(ct) = content_type {
            upload = upload.with_content_type(ct);
        }
        return Ok(Some(upload));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::Segment;

    #[test]
    fn test_response_envelope() {
        let transcript =
            Transcript::from_segments("en", vec![Segment::new(0, 0.0, 1.0, "hi")]);
        let value = serde_json::to_value(TranscribeResponse { results: transcript }).unwrap();
        assert_eq!(value["results"]["segments"][0]["text"], "hi");
    }
}
