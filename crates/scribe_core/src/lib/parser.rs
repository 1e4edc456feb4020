//! # Subtitle Parser
//!
//! Converts raw caption payloads into normalized transcript segments.
//! Two wire formats are understood: WebVTT (cue-based plain text) and
//! the platform's timed-text XML. A payload in neither format parses to
//! an empty sequence — the caller treats that as "try another track or
//! source", not as an error.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static MARKUP_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

static TEXT_ELEMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<text\s+([^>]*)>(.*?)</text>").unwrap());

static START_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"start="([^"]*)""#).unwrap());

/// One timestamped piece of spoken text, ordered chronologically within
/// its source track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub timestamp: String,
    pub text: String,
}

/// Detects the payload format and parses it into ordered segments.
///
/// Segments whose text is empty after trimming carry no information and
/// are dropped regardless of format.
pub fn parse_subtitles(payload: &str) -> Vec<TranscriptSegment> {
    let segments = if payload.contains("WEBVTT") || payload.contains("-->") {
        parse_vtt(payload)
    } else if payload.contains("<text") && payload.contains("start=") {
        parse_timedtext(payload)
    } else {
        tracing::warn!("unrecognized subtitle format");
        Vec::new()
    };

    segments
        .into_iter()
        .filter(|segment| !segment.text.trim().is_empty())
        .collect()
}

/// Scans WebVTT line by line. A line containing `-->` opens a cue: the
/// start timestamp is kept verbatim, the end token is truncated at the
/// first whitespace to drop cue settings, and the following non-blank
/// lines form the cue text with markup tags stripped.
fn parse_vtt(content: &str) -> Vec<TranscriptSegment> {
    let lines: Vec<&str> = content.lines().collect();
    let mut segments = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();

        if line.contains("-->") {
            let (start, rest) = line.split_once("-->").unwrap_or(("", ""));
            let start = start.trim();
            let end = rest.split_whitespace().next().unwrap_or("");

            if start.is_empty() || end.is_empty() {
                tracing::warn!(line, "skipping malformed cue timing line");
                i += 1;
                continue;
            }

            let mut text_lines = Vec::new();
            i += 1;
            while i < lines.len() && !lines[i].trim().is_empty() {
                let text_line = MARKUP_TAG_RE.replace_all(lines[i].trim(), "");
                if !text_line.is_empty() {
                    text_lines.push(text_line.into_owned());
                }
                i += 1;
            }

            if !text_lines.is_empty() {
                segments.push(TranscriptSegment {
                    timestamp: start.to_string(),
                    text: text_lines.join(" "),
                });
            }
        }

        i += 1;
    }

    segments
}

/// Reads every `<text start="...">` element of a timed-text document.
/// Elements with a non-numeric `start` are skipped without aborting the
/// rest of the document; a document with no matching elements yields an
/// empty sequence.
fn parse_timedtext(content: &str) -> Vec<TranscriptSegment> {
    let mut segments = Vec::new();

    for captures in TEXT_ELEMENT_RE.captures_iter(content) {
        let attrs = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
        let Some(start_attr) = START_ATTR_RE
            .captures(attrs)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
        else {
            continue;
        };
        let Ok(start) = start_attr.parse::<f64>() else {
            tracing::debug!(start = %start_attr, "skipping text element with non-numeric start");
            continue;
        };

        let raw_text = captures.get(2).map(|m| m.as_str()).unwrap_or_default();
        let unescaped = html_escape::decode_html_entities(raw_text);
        let text = MARKUP_TAG_RE.replace_all(unescaped.trim(), "");

        segments.push(TranscriptSegment {
            timestamp: seconds_to_timestamp(start),
            text: text.trim().to_string(),
        });
    }

    segments
}

/// Renders a seconds offset as `HH:MM:SS.mmm`, zero-padded.
pub fn seconds_to_timestamp(seconds: f64) -> String {
    let hours = (seconds / 3600.0).floor() as u64;
    let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
    let secs = seconds % 60.0;
    format!("{hours:02}:{minutes:02}:{secs:06.3}")
}
