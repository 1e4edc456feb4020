mod extractive;
pub mod gemini;
mod summarizer;

pub use extractive::{extractive_summary, format_as_paragraphs};
pub use summarizer::{Summarizer, SummaryResponse};

/// Produces a summary without ever surfacing a failure: the hosted model
/// is tried when configured, and any error lands on the extractive
/// fallback.
pub async fn summarize_or_fallback<S: Summarizer>(
    summarizer: Option<&S>,
    transcript: &str,
) -> String {
    if transcript.trim().len() < extractive::MIN_TRANSCRIPT_CHARS {
        return extractive_summary(transcript);
    }

    match summarizer {
        Some(model) => match model.summarize(transcript).await {
            Ok(response) => response.summary,
            Err(error) => {
                tracing::error!(error = ?error, "summarizer failed, using extractive fallback");
                extractive_summary(transcript)
            }
        },
        None => extractive_summary(transcript),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSummarizer;

    impl Summarizer for FailingSummarizer {
        const SUMMARIZER_MODEL: &'static str = "failing-model";
        type Error = String;

        async fn summarize(&self, _transcript: &str) -> Result<SummaryResponse, Self::Error> {
            Err("model unavailable".to_string())
        }
    }

    struct CannedSummarizer;

    impl Summarizer for CannedSummarizer {
        const SUMMARIZER_MODEL: &'static str = "canned-model";
        type Error = String;

        async fn summarize(&self, _transcript: &str) -> Result<SummaryResponse, Self::Error> {
            Ok(SummaryResponse {
                summary: "**Topics:** canned".to_string(),
            })
        }
    }

    fn long_transcript() -> String {
        "a meaningful sentence that easily clears the length threshold. ".repeat(5)
    }

    #[tokio::test]
    async fn model_summary_is_used_when_it_succeeds() {
        let summary = summarize_or_fallback(Some(&CannedSummarizer), &long_transcript()).await;
        assert_eq!(summary, "**Topics:** canned");
    }

    #[tokio::test]
    async fn model_failure_falls_back_to_extractive() {
        let summary = summarize_or_fallback(Some(&FailingSummarizer), &long_transcript()).await;
        assert!(summary.starts_with("**Topics:**"));
        assert!(summary.contains("**Takeaways:**"));
    }

    #[tokio::test]
    async fn missing_model_falls_back_to_extractive() {
        let summary =
            summarize_or_fallback::<CannedSummarizer>(None, &long_transcript()).await;
        assert!(summary.contains("**Points:**"));
    }

    #[tokio::test]
    async fn short_transcript_never_reaches_the_model() {
        let summary = summarize_or_fallback(Some(&FailingSummarizer), "tiny").await;
        assert!(summary.contains("too short"));
    }
}
