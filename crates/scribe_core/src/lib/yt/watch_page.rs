//! Last-resort caption backend: scrapes the watch page for the embedded
//! player data and reads the selected track in its structured `json3`
//! serialization, so no text-format parsing happens on this path.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use crate::parser::{seconds_to_timestamp, TranscriptSegment};
use crate::types::{PlayerResponse, TimedTextDoc};

use super::{select_track, CaptionTrack, FallbackSource, FallbackTranscript, FetchError};

static PLAYER_RESPONSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)var\s+ytInitialPlayerResponse\s*=\s*(\{.*?\});").unwrap()
});

const WATCH_URL: &str = "https://www.youtube.com/watch";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct WatchPageFallback {
    client: reqwest::Client,
}

impl WatchPageFallback {
    pub fn new() -> Self {
        WatchPageFallback {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for WatchPageFallback {
    fn default() -> Self {
        Self::new()
    }
}

fn extract_player_response(html: &str) -> Result<PlayerResponse, FetchError> {
    PLAYER_RESPONSE_RE
        .captures(html)
        .and_then(|captures| captures.get(1))
        .and_then(|json| serde_json::from_str(json.as_str()).ok())
        .ok_or(FetchError::MissingPlayerData)
}

fn events_to_segments(doc: TimedTextDoc) -> Vec<TranscriptSegment> {
    doc.events
        .into_iter()
        .filter_map(|event| {
            let start_ms = event.t_start_ms?;
            let text = event
                .segs?
                .iter()
                .filter_map(|seg| seg.utf8.as_deref())
                .collect::<String>()
                .replace('\n', " ")
                .trim()
                .to_string();
            if text.is_empty() {
                return None;
            }
            Some(TranscriptSegment {
                timestamp: seconds_to_timestamp(start_ms as f64 / 1000.0),
                text,
            })
        })
        .collect()
}

impl FallbackSource for WatchPageFallback {
    #[tracing::instrument(skip(self))]
    async fn fetch_segments(&self, video_id: &str) -> Result<FallbackTranscript, FetchError> {
        let response = self
            .client
            .get(format!("{WATCH_URL}?v={video_id}"))
            .timeout(REQUEST_TIMEOUT)
            .header("User-Agent", USER_AGENT)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status().as_u16(),
            });
        }
        let html = response.text().await?;

        let player = extract_player_response(&html)?;
        let title = player
            .video_details
            .as_ref()
            .and_then(|details| details.title.clone());

        let tracks: Vec<CaptionTrack> = player
            .captions
            .and_then(|captions| captions.player_captions_tracklist_renderer)
            .map(|renderer| {
                renderer
                    .caption_tracks
                    .into_iter()
                    .map(CaptionTrack::from)
                    .collect()
            })
            .unwrap_or_default();

        let Some(track) = select_track(&tracks) else {
            return Err(FetchError::NoCaptions { title });
        };

        let response = self
            .client
            .get(format!("{}&fmt=json3", track.base_url))
            .timeout(REQUEST_TIMEOUT)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status().as_u16(),
            });
        }
        let doc = response.json::<TimedTextDoc>().await?;

        Ok(FallbackTranscript {
            segments: events_to_segments(doc),
            title,
        })
    }
}
