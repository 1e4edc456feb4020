use reqwest::Client;
use serde::Deserialize;

use crate::llm::{Summarizer, SummaryResponse};

pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("response carried no candidate text")]
    EmptyResponse,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        GeminiClient {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn send_generate_request(
        &self,
        model_name: &str,
        prompt: &str,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": 0.3,
                "maxOutputTokens": 1000,
                "topP": 0.8,
                "topK": 40
            }
        });

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent?key={}",
                self.base_url, model_name, self.api_key
            ))
            .json(&body)
            .send()
            .await
            .inspect_err(|error| tracing::error!(%error, "Failed to make http request"))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api { status, message });
        }

        Ok(response.json::<GenerateContentResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
pub struct ContentPart {
    pub text: Option<String>,
}

impl Summarizer for GeminiClient {
    const SUMMARIZER_MODEL: &'static str = "gemini-1.5-flash";
    type Error = GeminiError;

    async fn summarize(&self, transcript: &str) -> Result<SummaryResponse, GeminiError> {
        let clipped: String = transcript.chars().take(Self::MAX_INPUT_CHARS).collect();
        let prompt = format!(
            "Summarize this YouTube transcript in 3 sections:\n\n\
             **Topics:** Main subjects discussed\n\
             **Points:** Key arguments and ideas\n\
             **Takeaways:** Important conclusions\n\n\
             Transcript: {clipped}"
        );

        let response = self
            .send_generate_request(Self::SUMMARIZER_MODEL, &prompt)
            .await
            .inspect_err(|error| tracing::error!(error = ?error, "Failed to summarize content"))?;

        let summary = response
            .candidates
            .into_iter()
            .find_map(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .filter(|text| !text.trim().is_empty())
            .ok_or(GeminiError::EmptyResponse)?;

        Ok(SummaryResponse { summary })
    }
}
