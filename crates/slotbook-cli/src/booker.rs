//! Booking orchestration.
//!
//! [`Booker`] drives one scheduling request end to end: extraction first,
//! then the scheduler's conflict check and insertion. Extraction happens
//! strictly before any store access, so a failed or timed-out extraction
//! leaves the calendar untouched, and every request resolves to exactly one
//! [`ScheduleOutcome`] — errors never escape this boundary.

use tracing::{debug, warn};

use slotbook_core::{Event, ScheduleOutcome, Scheduler};
use slotbook_extract::EventExtractor;

/// Turns free-text requests into scheduled events.
///
/// Holds the extractor as a trait object, so a test double substitutes for
/// the HTTP gateway without touching any of the orchestration logic.
pub struct Booker {
    scheduler: Scheduler,
    extractor: Box<dyn EventExtractor>,
}

impl Booker {
    /// Creates a booker from an extractor and a configured scheduler.
    pub fn new(extractor: Box<dyn EventExtractor>, scheduler: Scheduler) -> Self {
        Self {
            scheduler,
            extractor,
        }
    }

    /// Schedules one free-text request.
    ///
    /// With `allow_plan`, a colliding request triggers the alternative-slot
    /// search and the suggestion (if any) is reported back — never booked.
    pub async fn schedule(&mut self, text: &str, allow_plan: bool) -> ScheduleOutcome {
        debug!(extractor = self.extractor.name(), "extracting event from request");
        match self.extractor.extract_event(text).await {
            Ok(event) => self.scheduler.schedule(event, allow_plan),
            Err(error) => {
                warn!(code = error.code().as_str(), error = %error, "could not parse event");
                ScheduleOutcome::ParseFailure {
                    reason: error.to_string(),
                }
            }
        }
    }

    /// All booked events, ordered ascending by start time.
    pub fn agenda(&self) -> Vec<&Event> {
        self.scheduler.store().list_sorted()
    }

    /// Read access to the underlying scheduler.
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }
}
