//! Wire types for the upstream player metadata and structured caption
//! responses.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub playability_status: Option<PlayabilityStatus>,
    pub video_details: Option<VideoDetails>,
    pub captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayabilityStatus {
    pub status: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    pub video_id: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Captions {
    pub player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TracklistRenderer {
    #[serde(default)]
    pub caption_tracks: Vec<RawCaptionTrack>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCaptionTrack {
    pub base_url: String,
    pub language_code: String,
    /// `"asr"` marks an auto-generated track.
    pub kind: Option<String>,
}

/// The `json3` caption serialization used by the fallback backend: a
/// flat list of timed events, each holding text runs.
#[derive(Debug, Deserialize)]
pub struct TimedTextDoc {
    #[serde(default)]
    pub events: Vec<TimedTextEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimedTextEvent {
    pub t_start_ms: Option<u64>,
    pub d_duration_ms: Option<u64>,
    pub segs: Option<Vec<TimedTextSeg>>,
}

#[derive(Debug, Deserialize)]
pub struct TimedTextSeg {
    pub utf8: Option<String>,
}
