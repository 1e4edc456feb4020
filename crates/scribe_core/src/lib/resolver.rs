use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;

static VIDEO_ID_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:v=|youtu\.be/|youtube\.com/shorts/)([0-9A-Za-z_-]{11})",
        r"youtube\.com/embed/([0-9A-Za-z_-]{11})",
        r"youtube\.com/v/([0-9A-Za-z_-]{11})",
        r"youtube\.com/watch\?.*v=([0-9A-Za-z_-]{11})",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// A validated reference to a single video: the URL it came from plus
/// the canonical 11-character platform identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoReference {
    raw_url: String,
    video_id: String,
}

impl VideoReference {
    /// Derives the video id from any of the supported URL shapes
    /// (`watch?v=`, `youtu.be/`, `/shorts/`, `/embed/`, `/v/`).
    ///
    /// The patterns are tried in a fixed order and the first capturing
    /// match wins. An unmatched URL is a hard failure, never a guess.
    pub fn resolve(url: &str) -> Result<Self, Error> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidReference(url.to_string()));
        }

        VIDEO_ID_PATTERNS
            .iter()
            .find_map(|pattern| pattern.captures(trimmed))
            .and_then(|captures| captures.get(1))
            .map(|id| VideoReference {
                raw_url: trimmed.to_string(),
                video_id: id.as_str().to_string(),
            })
            .ok_or_else(|| Error::InvalidReference(url.to_string()))
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    pub fn url(&self) -> &str {
        &self.raw_url
    }
}
