//! Deterministic extractive summary used whenever the hosted model is
//! unavailable or errors out.

use itertools::Itertools;

pub(crate) const MIN_TRANSCRIPT_CHARS: usize = 50;
const MIN_SENTENCE_CHARS: usize = 20;
const MAX_SENTENCES_SCANNED: usize = 20;

/// Builds a summary by selecting representative existing sentences:
/// the first, middle, and last of the meaningful leading sentences.
pub fn extractive_summary(transcript: &str) -> String {
    if transcript.trim().len() < MIN_TRANSCRIPT_CHARS {
        return "**Summary:** Transcript too short for meaningful summary.".to_string();
    }

    let sentences: Vec<&str> = transcript
        .split(". ")
        .take(MAX_SENTENCES_SCANNED)
        .map(str::trim)
        .filter(|sentence| sentence.len() > MIN_SENTENCE_CHARS)
        .collect();

    let picked: Vec<&str> = if sentences.len() <= 3 {
        sentences.clone()
    } else {
        vec![
            sentences[0],
            sentences[sentences.len() / 2],
            sentences[sentences.len() - 1],
        ]
    };

    let mut summary = picked.iter().join(". ");
    if !summary.is_empty() && !summary.ends_with('.') {
        summary.push('.');
    }

    format!(
        "**Topics:** Video content analysis\n**Points:** {summary}\n**Takeaways:** Review full transcript for detailed insights"
    )
}

/// Chunks plain text into paragraphs bounded by `max_length` characters,
/// splitting on sentence boundaries.
pub fn format_as_paragraphs(text: &str, max_length: usize) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let sentences: Vec<&str> = text.split(". ").collect();
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for (idx, sentence) in sentences.iter().enumerate() {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }

        let mut sentence = sentence.to_string();
        // Restore the period the split swallowed, except on the tail.
        if !sentence.ends_with('.') && idx != sentences.len() - 1 {
            sentence.push('.');
        }

        if !current.is_empty() && current.len() + sentence.len() + 1 > max_length {
            paragraphs.push(current);
            current = sentence;
        } else if current.is_empty() {
            current = sentence;
        } else {
            current.push(' ');
            current.push_str(&sentence);
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs
}
