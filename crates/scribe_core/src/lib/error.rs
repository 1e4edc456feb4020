/// Errors surfaced by the extraction pipeline to its caller.
///
/// Everything that goes wrong below the orchestrator while a single
/// retrieval strategy runs is converted into "try the next strategy" and
/// never reaches this taxonomy; only an unusable reference and total
/// exhaustion are user-visible.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The URL does not contain a recognizable 11-character video id.
    #[error("could not extract a video id from `{0}`")]
    InvalidReference(String),

    /// Every retrieval strategy and the fallback backend came up empty.
    /// Carries the best title discovered across all attempts, if any.
    #[error("no transcript found")]
    NoTranscriptFound { title: Option<String> },
}
