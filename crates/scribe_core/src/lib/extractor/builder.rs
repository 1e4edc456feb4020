use crate::yt::strategy::ProxyEndpoint;
use crate::yt::{CaptionSource, FallbackSource};
use crate::TranscriptExtractor;

/// Typestate builder: both backends must be supplied before `build`
/// exists.
pub struct TranscriptExtractorBuilder<C = (), F = ()> {
    source: C,
    fallback: F,
    proxies: Vec<ProxyEndpoint>,
}

impl TranscriptExtractorBuilder {
    pub fn new() -> Self {
        TranscriptExtractorBuilder {
            source: (),
            fallback: (),
            proxies: Vec::new(),
        }
    }
}

impl Default for TranscriptExtractorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, F> TranscriptExtractorBuilder<C, F> {
    pub fn caption_source<C2: CaptionSource + Send + Sync>(
        self,
        source: C2,
    ) -> TranscriptExtractorBuilder<C2, F> {
        TranscriptExtractorBuilder {
            source,
            fallback: self.fallback,
            proxies: self.proxies,
        }
    }

    pub fn fallback_source<F2: FallbackSource + Send + Sync>(
        self,
        fallback: F2,
    ) -> TranscriptExtractorBuilder<C, F2> {
        TranscriptExtractorBuilder {
            source: self.source,
            fallback,
            proxies: self.proxies,
        }
    }

    /// Externally configured proxy endpoints considered when a caller
    /// asks for proxied retrieval.
    pub fn proxies(mut self, proxies: Vec<ProxyEndpoint>) -> Self {
        self.proxies = proxies;
        self
    }
}

impl<C, F> TranscriptExtractorBuilder<C, F>
where
    C: CaptionSource + Send + Sync,
    F: FallbackSource + Send + Sync,
{
    pub fn build(self) -> TranscriptExtractor<C, F> {
        TranscriptExtractor {
            source: self.source,
            fallback: self.fallback,
            proxies: self.proxies,
        }
    }
}
