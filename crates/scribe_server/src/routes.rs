//! Thin HTTP transport over the extraction pipeline: request/response
//! envelopes, segment capping, and display-timestamp formatting live
//! here, never in the core.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use scribe_core::{summarize_or_fallback, Error, TranscriptSegment, VideoReference};

use crate::AppState;

/// Responses carry at most this many transcript segments.
const MAX_SEGMENTS: usize = 500;
/// Summaries are generated from at most this many leading segments.
const MAX_SUMMARY_SEGMENTS: usize = 100;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/extract", post(extract))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    youtube_url: String,
    #[serde(default = "default_true")]
    generate_summary: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    success: bool,
    video_id: String,
    video_title: String,
    transcript: Vec<DisplaySegment>,
    summary: String,
    total_segments: usize,
}

#[derive(Debug, Serialize)]
pub struct DisplaySegment {
    timestamp: String,
    text: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    success: bool,
    error: String,
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "YouTube Transcript Generator"
    }))
}

async fn extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, (StatusCode, Json<ErrorResponse>)> {
    let url = request.youtube_url.trim().to_string();
    if url.is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Please provide a YouTube URL".to_string(),
        ));
    }

    let video = VideoReference::resolve(&url)
        .map_err(|error| error_response(StatusCode::BAD_REQUEST, error.to_string()))?;
    tracing::info!(video_id = %video.video_id(), "processing extraction request");

    let result = state
        .extractor
        .extract(&url, state.use_proxy)
        .await
        .map_err(|error| match error {
            Error::InvalidReference(_) => {
                error_response(StatusCode::BAD_REQUEST, error.to_string())
            }
            Error::NoTranscriptFound { ref title } => {
                let mut message = "Could not extract transcript from this video.".to_string();
                match title {
                    Some(title) => message.push_str(&format!(
                        " Video \"{title}\" may not have captions available or may be restricted."
                    )),
                    None => message.push_str(
                        " The video may not have captions available, be private, or be restricted in your region.",
                    ),
                }
                error_response(StatusCode::BAD_REQUEST, message)
            }
        })?;

    let transcript = to_display(&result.segments);

    let summary = if request.generate_summary && !transcript.is_empty() {
        let full_text = result
            .segments
            .iter()
            .take(MAX_SUMMARY_SEGMENTS)
            .map(|segment| segment.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        summarize_or_fallback(state.summarizer.as_deref(), &full_text).await
    } else {
        String::new()
    };

    Ok(Json(ExtractResponse {
        success: true,
        video_id: video.video_id().to_string(),
        video_title: result
            .title
            .unwrap_or_else(|| "Unknown Title".to_string()),
        total_segments: transcript.len(),
        transcript,
        summary,
    }))
}

fn to_display(segments: &[TranscriptSegment]) -> Vec<DisplaySegment> {
    segments
        .iter()
        .take(MAX_SEGMENTS)
        .map(|segment| DisplaySegment {
            timestamp: display_timestamp(&segment.timestamp),
            text: segment.text.clone(),
        })
        .collect()
}

/// Collapses an `HH:MM:SS.mmm` timestamp into the `MM:SS` shape used by
/// the UI. Anything unparsable renders as `00:00`.
fn display_timestamp(timestamp: &str) -> String {
    let parts: Vec<&str> = timestamp.split(':').collect();
    if parts.len() < 2 {
        return "00:00".to_string();
    }

    let minutes = parts[parts.len() - 2]
        .parse::<f64>()
        .map(|value| value as u64)
        .unwrap_or(0);
    let seconds = parts[parts.len() - 1]
        .parse::<f64>()
        .map(|value| value as u64)
        .unwrap_or(0);

    format!("{minutes:02}:{seconds:02}")
}

fn error_response(status: StatusCode, error: String) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            success: false,
            error,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_timestamp_collapses_to_minutes_and_seconds() {
        assert_eq!(display_timestamp("00:01:05.250"), "01:05");
        assert_eq!(display_timestamp("01:02:03.000"), "02:03");
        assert_eq!(display_timestamp("12:34"), "12:34");
    }

    #[test]
    fn display_timestamp_tolerates_garbage() {
        assert_eq!(display_timestamp("garbage"), "00:00");
        assert_eq!(display_timestamp(""), "00:00");
        assert_eq!(display_timestamp("aa:bb"), "00:00");
    }

    #[test]
    fn transcript_is_capped_at_five_hundred_segments() {
        let segments: Vec<TranscriptSegment> = (0..800)
            .map(|i| TranscriptSegment {
                timestamp: "00:00:01.000".to_string(),
                text: format!("segment {i}"),
            })
            .collect();

        let display = to_display(&segments);
        assert_eq!(display.len(), MAX_SEGMENTS);
        assert_eq!(display[0].text, "segment 0");
        assert_eq!(display[MAX_SEGMENTS - 1].text, "segment 499");
    }

    #[test]
    fn short_transcripts_are_not_padded() {
        let segments = vec![TranscriptSegment {
            timestamp: "00:00:00.000".to_string(),
            text: "only one".to_string(),
        }];
        assert_eq!(to_display(&segments).len(), 1);
    }
}
