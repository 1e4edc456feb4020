//! # Scribe Core
//!
//! Transcript acquisition pipeline for YouTube videos: resolves a video
//! reference from a URL, retrieves caption data across multiple network
//! paths and simulated client identities, parses the subtitle payload
//! into normalized segments, and summarizes the result via a hosted
//! language model with a deterministic extractive fallback.

mod error;
mod extractor;
mod llm;
pub mod parser;
pub mod resolver;
pub mod tracing;
pub mod types;
pub mod yt;

pub use error::Error;
pub use extractor::{builder::TranscriptExtractorBuilder, ExtractionResult, TranscriptExtractor};
pub use llm::gemini;
pub use llm::{
    extractive_summary, format_as_paragraphs, summarize_or_fallback, Summarizer, SummaryResponse,
};
pub use parser::TranscriptSegment;
pub use resolver::VideoReference;
