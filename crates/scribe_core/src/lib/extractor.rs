pub mod builder;

use crate::error::Error;
use crate::parser::{self, TranscriptSegment};
use crate::resolver::VideoReference;
use crate::yt::strategy::{enumerate_strategies, ProxyEndpoint};
use crate::yt::{CaptionSource, FallbackSource};

/// The normalized outcome of a successful extraction. Title and segments
/// are discovered independently; the title is whatever the most recent
/// metadata fetch knew.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    pub segments: Vec<TranscriptSegment>,
    pub title: Option<String>,
}

/// Drives retrieval strategies against the primary caption backend and
/// falls back to a secondary backend once they are exhausted.
///
/// The first strategy whose payload parses to at least one segment wins
/// and nothing is revisited. Every failure below this type is local:
/// logged, recorded, and converted into "try the next option".
pub struct TranscriptExtractor<C, F>
where
    C: CaptionSource + Send + Sync,
    F: FallbackSource + Send + Sync,
{
    source: C,
    fallback: F,
    proxies: Vec<ProxyEndpoint>,
}

impl<C, F> TranscriptExtractor<C, F>
where
    C: CaptionSource + Send + Sync,
    F: FallbackSource + Send + Sync,
{
    #[tracing::instrument(skip(self))]
    pub async fn extract(&self, url: &str, use_proxy: bool) -> Result<ExtractionResult, Error> {
        let video = VideoReference::resolve(url)?;
        let strategies = enumerate_strategies(use_proxy, &self.proxies).await;
        tracing::debug!(
            video_id = %video.video_id(),
            count = strategies.len(),
            "enumerated retrieval strategies"
        );

        let mut best_title: Option<String> = None;

        for strategy in &strategies {
            match self.source.fetch_captions(&video, strategy).await {
                Ok(payload) => {
                    if payload.title.is_some() {
                        best_title = payload.title.clone();
                    }
                    let segments = parser::parse_subtitles(&payload.body);
                    if segments.is_empty() {
                        tracing::warn!(?strategy, "caption payload parsed to zero segments");
                        continue;
                    }
                    tracing::info!(
                        video_id = %video.video_id(),
                        segments = segments.len(),
                        ?strategy,
                        "transcript extracted"
                    );
                    return Ok(ExtractionResult {
                        segments,
                        title: best_title,
                    });
                }
                Err(error) => {
                    if let Some(title) = error.known_title() {
                        best_title = Some(title.to_string());
                    }
                    tracing::warn!(%error, ?strategy, "strategy failed, trying next");
                }
            }
        }

        tracing::info!(video_id = %video.video_id(), "primary backend exhausted, trying fallback");
        match self.fallback.fetch_segments(video.video_id()).await {
            Ok(transcript) => {
                if transcript.title.is_some() {
                    best_title = transcript.title.clone();
                }
                if !transcript.segments.is_empty() {
                    tracing::info!(
                        video_id = %video.video_id(),
                        segments = transcript.segments.len(),
                        "transcript extracted via fallback backend"
                    );
                    return Ok(ExtractionResult {
                        segments: transcript.segments,
                        title: best_title,
                    });
                }
                tracing::warn!("fallback backend returned zero segments");
            }
            Err(error) => {
                if let Some(title) = error.known_title() {
                    best_title = Some(title.to_string());
                }
                tracing::warn!(%error, "fallback backend failed");
            }
        }

        Err(Error::NoTranscriptFound { title: best_title })
    }
}
