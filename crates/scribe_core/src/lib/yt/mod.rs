pub mod cookies;
pub mod innertube;
pub mod strategy;
pub mod watch_page;

use std::future::Future;

use crate::parser::TranscriptSegment;
use crate::resolver::VideoReference;
use crate::types::RawCaptionTrack;
use strategy::RetrievalStrategy;

/// Preference-ordered caption languages. Manual tracks win over
/// auto-generated ones at equal language rank.
pub const LANGUAGE_PRIORITY: [&str; 5] = ["en", "en-US", "en-GB", "en-CA", "en-AU"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    Manual,
    Automatic,
}

/// Subtitle serialization formats, in download preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionFormat {
    Vtt,
    Srv3,
    Srv2,
    Srv1,
}

impl CaptionFormat {
    pub const PREFERRED: [CaptionFormat; 4] = [
        CaptionFormat::Vtt,
        CaptionFormat::Srv3,
        CaptionFormat::Srv2,
        CaptionFormat::Srv1,
    ];

    pub fn query_value(&self) -> &'static str {
        match self {
            CaptionFormat::Vtt => "vtt",
            CaptionFormat::Srv3 => "srv3",
            CaptionFormat::Srv2 => "srv2",
            CaptionFormat::Srv1 => "srv1",
        }
    }
}

/// One language/kind-specific caption track advertised by the upstream
/// metadata, with the formats it can be downloaded in.
#[derive(Debug, Clone)]
pub struct CaptionTrack {
    pub language: String,
    pub kind: TrackKind,
    pub base_url: String,
    pub formats: Vec<CaptionFormat>,
}

impl From<RawCaptionTrack> for CaptionTrack {
    fn from(raw: RawCaptionTrack) -> Self {
        let kind = if raw.kind.as_deref() == Some("asr") {
            TrackKind::Automatic
        } else {
            TrackKind::Manual
        };
        CaptionTrack {
            language: raw.language_code,
            kind,
            base_url: raw.base_url,
            formats: CaptionFormat::PREFERRED.to_vec(),
        }
    }
}

/// Applies the track selection precedence: a manual track in the first
/// matching preferred language, then an auto-generated one in the same
/// language order.
pub fn select_track(tracks: &[CaptionTrack]) -> Option<&CaptionTrack> {
    for kind in [TrackKind::Manual, TrackKind::Automatic] {
        for language in LANGUAGE_PRIORITY {
            if let Some(track) = tracks
                .iter()
                .find(|track| track.kind == kind && track.language == language)
            {
                return Some(track);
            }
        }
    }
    None
}

/// One downloaded caption payload plus whatever metadata came with it.
#[derive(Debug, Clone)]
pub struct CaptionPayload {
    pub body: String,
    pub format: CaptionFormat,
    pub title: Option<String>,
}

/// A transcript handed back by the fallback backend, already structured.
#[derive(Debug, Clone)]
pub struct FallbackTranscript {
    pub segments: Vec<TranscriptSegment>,
    pub title: Option<String>,
}

/// Failures local to one retrieval strategy or one fallback lookup. The
/// orchestrator converts every variant into "try the next option".
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("http request failed: {0}")]
    Middleware(#[from] reqwest_middleware::Error),
    #[error("http transport failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned status {status}")]
    Status { status: u16 },
    #[error("video is not playable: {reason}")]
    Unplayable {
        title: Option<String>,
        reason: String,
    },
    #[error("no caption track matches the language preference")]
    NoCaptions { title: Option<String> },
    #[error("no caption format could be downloaded")]
    DownloadFailed { title: Option<String> },
    #[error("player data missing from watch page")]
    MissingPlayerData,
}

impl FetchError {
    /// Title learned before the failure, when metadata got that far.
    pub fn known_title(&self) -> Option<&str> {
        match self {
            FetchError::Unplayable { title, .. }
            | FetchError::NoCaptions { title }
            | FetchError::DownloadFailed { title } => title.as_deref(),
            _ => None,
        }
    }
}

/// Primary caption backend: fetches metadata and a subtitle payload for
/// one (network path, client identity) strategy.
pub trait CaptionSource {
    fn fetch_captions(
        &self,
        video: &VideoReference,
        strategy: &RetrievalStrategy,
    ) -> impl Future<Output = Result<CaptionPayload, FetchError>> + Send;
}

/// Secondary caption backend: an independent lookup by video identifier
/// that returns timed items directly, used once every strategy against
/// the primary backend is exhausted.
pub trait FallbackSource {
    fn fetch_segments(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<FallbackTranscript, FetchError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(language: &str, kind: TrackKind) -> CaptionTrack {
        CaptionTrack {
            language: language.to_string(),
            kind,
            base_url: format!("https://example.invalid/{language}"),
            formats: CaptionFormat::PREFERRED.to_vec(),
        }
    }

    #[test]
    fn manual_track_beats_automatic_at_equal_language_rank() {
        let tracks = vec![
            track("en", TrackKind::Automatic),
            track("en", TrackKind::Manual),
        ];
        let selected = select_track(&tracks).unwrap();
        assert_eq!(selected.kind, TrackKind::Manual);
    }

    #[test]
    fn manual_track_in_lower_ranked_language_still_beats_automatic() {
        let tracks = vec![
            track("en", TrackKind::Automatic),
            track("en-AU", TrackKind::Manual),
        ];
        let selected = select_track(&tracks).unwrap();
        assert_eq!(selected.language, "en-AU");
        assert_eq!(selected.kind, TrackKind::Manual);
    }

    #[test]
    fn automatic_track_is_selected_when_no_manual_matches() {
        let tracks = vec![track("en-GB", TrackKind::Automatic)];
        let selected = select_track(&tracks).unwrap();
        assert_eq!(selected.language, "en-GB");
    }

    #[test]
    fn language_order_is_respected_within_a_kind() {
        let tracks = vec![
            track("en-GB", TrackKind::Manual),
            track("en-US", TrackKind::Manual),
        ];
        let selected = select_track(&tracks).unwrap();
        assert_eq!(selected.language, "en-US");
    }

    #[test]
    fn unmatched_languages_yield_no_track() {
        let tracks = vec![track("de", TrackKind::Manual), track("fr", TrackKind::Automatic)];
        assert!(select_track(&tracks).is_none());
    }

    #[test]
    fn asr_kind_maps_to_automatic() {
        let raw = RawCaptionTrack {
            base_url: "https://example.invalid/t".to_string(),
            language_code: "en".to_string(),
            kind: Some("asr".to_string()),
        };
        assert_eq!(CaptionTrack::from(raw).kind, TrackKind::Automatic);
    }
}
