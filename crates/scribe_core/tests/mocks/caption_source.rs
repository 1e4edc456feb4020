use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use scribe_core::yt::strategy::RetrievalStrategy;
use scribe_core::yt::{CaptionFormat, CaptionPayload, CaptionSource, FetchError};
use scribe_core::VideoReference;

/// One canned outcome for a single strategy attempt.
#[derive(Clone)]
pub enum Outcome {
    Payload {
        body: String,
        title: Option<String>,
    },
    NoCaptions {
        title: Option<String>,
    },
    ServerError,
}

/// Scripted caption source: yields the configured outcomes in order,
/// repeats the default once the script is exhausted, and records every
/// strategy it was asked to try.
pub struct ScriptedCaptionSource {
    outcomes: Mutex<VecDeque<Outcome>>,
    default: Option<Outcome>,
    pub calls: Arc<Mutex<Vec<RetrievalStrategy>>>,
}

impl ScriptedCaptionSource {
    pub fn new(outcomes: Vec<Outcome>) -> Self {
        ScriptedCaptionSource {
            outcomes: Mutex::new(outcomes.into()),
            default: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every attempt ends with the same outcome.
    pub fn always(outcome: Outcome) -> Self {
        ScriptedCaptionSource {
            outcomes: Mutex::new(VecDeque::new()),
            default: Some(outcome),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl CaptionSource for ScriptedCaptionSource {
    async fn fetch_captions(
        &self,
        _video: &VideoReference,
        strategy: &RetrievalStrategy,
    ) -> Result<CaptionPayload, FetchError> {
        self.calls.lock().unwrap().push(strategy.clone());

        let outcome = self
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .or_else(|| self.default.clone())
            .expect("scripted caption source ran out of outcomes");

        match outcome {
            Outcome::Payload { body, title } => Ok(CaptionPayload {
                body,
                format: CaptionFormat::Vtt,
                title,
            }),
            Outcome::NoCaptions { title } => Err(FetchError::NoCaptions { title }),
            Outcome::ServerError => Err(FetchError::Status { status: 503 }),
        }
    }
}
