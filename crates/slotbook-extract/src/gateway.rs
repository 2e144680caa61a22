//! EventExtractor trait definition.
//!
//! This module defines the [`EventExtractor`] trait, the abstraction for
//! turning free text into a validated [`Event`]. The production
//! implementation calls an OpenAI-compatible model endpoint; the doubles in
//! this module let scheduler and orchestration tests run without any network.
//!
//! The gateway contract is all-or-nothing: an implementation either returns a
//! fully valid event or a typed failure, never a partially-filled record.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use slotbook_core::Event;

use crate::error::{ExtractError, ExtractResult};

/// A boxed future for async trait methods.
///
/// Boxed futures keep the trait object-safe, so callers can hold a
/// `Box<dyn EventExtractor>` and swap implementations freely.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The core abstraction for extraction gateways.
///
/// Implementations must not mutate any scheduling state: extraction is a
/// read-only, possibly-failing external call, and a failed or timed-out
/// extraction leaves the calendar exactly as it was.
pub trait EventExtractor: Send + Sync {
    /// Returns the name of this extractor (e.g., "openai").
    fn name(&self) -> &str;

    /// Extracts a structured event from free-form text.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] when the model cannot be reached, produces
    /// unusable output, or the output fails record validation.
    fn extract_event(&self, text: &str) -> BoxFuture<'_, ExtractResult<Event>>;
}

/// An extractor that always fails with a fixed error code.
///
/// Useful as a placeholder when the real gateway fails to initialize, and in
/// tests exercising the failure path.
#[derive(Debug)]
pub struct FailingExtractor {
    name: String,
    error: ExtractError,
}

impl FailingExtractor {
    /// Creates a new failing extractor.
    pub fn new(name: impl Into<String>, error: ExtractError) -> Self {
        Self {
            name: name.into(),
            error,
        }
    }
}

impl EventExtractor for FailingExtractor {
    fn name(&self) -> &str {
        &self.name
    }

    fn extract_event(&self, _text: &str) -> BoxFuture<'_, ExtractResult<Event>> {
        // ExtractError is not Clone; rebuild it from its parts.
        let error = ExtractError::new(self.error.code(), self.error.message());
        Box::pin(async move { Err(error) })
    }
}

/// An extractor that replays a scripted queue of results.
///
/// Each call to [`EventExtractor::extract_event`] pops the next queued
/// result, ignoring the input text. Popping an empty queue reports a
/// configuration error, which makes an over-long test script fail loudly.
#[derive(Debug, Default)]
pub struct ScriptedExtractor {
    responses: Mutex<VecDeque<ExtractResult<Event>>>,
}

impl ScriptedExtractor {
    /// Creates an extractor with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an extractor preloaded with the given results.
    pub fn with_responses(responses: impl IntoIterator<Item = ExtractResult<Event>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
        }
    }

    /// Appends a successful extraction to the script.
    pub fn push_event(&self, event: Event) {
        self.responses
            .lock()
            .expect("script lock poisoned")
            .push_back(Ok(event));
    }

    /// Appends a failure to the script.
    pub fn push_error(&self, error: ExtractError) {
        self.responses
            .lock()
            .expect("script lock poisoned")
            .push_back(Err(error));
    }

    /// Number of unconsumed script entries.
    pub fn remaining(&self) -> usize {
        self.responses.lock().expect("script lock poisoned").len()
    }
}

impl EventExtractor for ScriptedExtractor {
    fn name(&self) -> &str {
        "scripted"
    }

    fn extract_event(&self, _text: &str) -> BoxFuture<'_, ExtractResult<Event>> {
        let next = self
            .responses
            .lock()
            .expect("script lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(ExtractError::configuration("scripted extractor exhausted")));
        Box::pin(async move { next })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractErrorCode;
    use chrono::NaiveDate;

    fn sample_event() -> Event {
        let start = NaiveDate::from_ymd_opt(2025, 9, 19)
            .unwrap()
            .and_hms_opt(17, 0, 0)
            .unwrap();
        Event::new("science fair", start, vec!["Alice".to_string()]).unwrap()
    }

    #[tokio::test]
    async fn failing_extractor_always_errors() {
        let extractor = FailingExtractor::new("test", ExtractError::configuration("no api key"));

        assert_eq!(extractor.name(), "test");
        let err = extractor.extract_event("anything").await.unwrap_err();
        assert_eq!(err.code(), ExtractErrorCode::ConfigurationError);

        // And again - the error is rebuilt per call.
        assert!(extractor.extract_event("more").await.is_err());
    }

    #[tokio::test]
    async fn scripted_extractor_replays_in_order() {
        let extractor = ScriptedExtractor::with_responses([
            Ok(sample_event()),
            Err(ExtractError::malformed_response("not json")),
        ]);
        assert_eq!(extractor.remaining(), 2);

        let event = extractor.extract_event("first").await.unwrap();
        assert_eq!(event.name(), "science fair");

        let err = extractor.extract_event("second").await.unwrap_err();
        assert_eq!(err.code(), ExtractErrorCode::MalformedResponse);
        assert_eq!(extractor.remaining(), 0);
    }

    #[tokio::test]
    async fn exhausted_script_reports_configuration_error() {
        let extractor = ScriptedExtractor::new();
        let err = extractor.extract_event("anything").await.unwrap_err();
        assert_eq!(err.code(), ExtractErrorCode::ConfigurationError);
    }

    #[tokio::test]
    async fn extractors_are_object_safe() {
        let boxed: Box<dyn EventExtractor> = Box::new(ScriptedExtractor::with_responses([Ok(
            sample_event(),
        )]));
        assert!(boxed.extract_event("text").await.is_ok());
    }
}
