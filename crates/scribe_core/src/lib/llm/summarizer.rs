use std::fmt::Debug;
use std::future::Future;

/// A hosted language model that turns transcript text into a short
/// structured summary.
pub trait Summarizer {
    /// Upper bound on transcript characters sent per request.
    const MAX_INPUT_CHARS: usize = 2_000;
    const SUMMARIZER_MODEL: &'static str;

    type Error: Debug;

    fn summarize(
        &self,
        transcript: &str,
    ) -> impl Future<Output = Result<SummaryResponse, Self::Error>> + Send;
}

#[derive(Debug, Clone)]
pub struct SummaryResponse {
    pub summary: String,
}
