use std::sync::{Arc, Mutex};

use scribe_core::yt::{FallbackSource, FallbackTranscript, FetchError};
use scribe_core::TranscriptSegment;

/// Stub for the secondary caption backend, counting how often it runs.
pub struct StubFallback {
    segments: Vec<TranscriptSegment>,
    title: Option<String>,
    fail: bool,
    pub calls: Arc<Mutex<usize>>,
}

impl StubFallback {
    pub fn with_segments(segments: Vec<TranscriptSegment>, title: Option<String>) -> Self {
        StubFallback {
            segments,
            title,
            fail: false,
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn empty() -> Self {
        Self::with_segments(Vec::new(), None)
    }

    pub fn failing() -> Self {
        StubFallback {
            segments: Vec::new(),
            title: None,
            fail: true,
            calls: Arc::new(Mutex::new(0)),
        }
    }
}

impl FallbackSource for StubFallback {
    async fn fetch_segments(&self, _video_id: &str) -> Result<FallbackTranscript, FetchError> {
        *self.calls.lock().unwrap() += 1;

        if self.fail {
            return Err(FetchError::Status { status: 500 });
        }

        Ok(FallbackTranscript {
            segments: self.segments.clone(),
            title: self.title.clone(),
        })
    }
}
